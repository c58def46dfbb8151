//! Domain-level building blocks for the project memory service.
//!
//! Everything here is independent of HTTP and storage: shared ID and
//! timestamp aliases, the domain error taxonomy, the shell execution
//! layer, and revision resolution against the version-control tool.

pub mod error;
pub mod exec;
pub mod types;
pub mod vcs;
