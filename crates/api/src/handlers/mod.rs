//! HTTP handlers, one module per resource.

pub mod code_version;
pub mod error_log;
pub mod execution;
pub mod project;
pub mod step;
