//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument. Log repositories only insert
//! and list; audit rows are never updated or deleted.

pub mod code_version_repo;
pub mod error_log_repo;
pub mod execution_log_repo;
pub mod project_repo;
pub mod step_repo;

pub use code_version_repo::CodeVersionRepo;
pub use error_log_repo::ErrorLogRepo;
pub use execution_log_repo::ExecutionLogRepo;
pub use project_repo::ProjectRepo;
pub use step_repo::StepRepo;
