//! Execution log entity model and DTOs.

use projmem_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An execution log row: the audit record of one command invocation.
///
/// Rows are append-only. `output` reflects the command's actual
/// terminal state; failed runs carry an error-tagged output rather than
/// being dropped.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ExecutionLog {
    pub id: DbId,
    pub project_id: DbId,
    pub step_id: DbId,
    pub command: String,
    pub output: String,
    pub timestamp: Timestamp,
}

/// DTO for recording an execution. Built by the execution recorder
/// after the command has terminated, never from a request body.
#[derive(Debug, Clone)]
pub struct CreateExecutionLog {
    pub project_id: DbId,
    pub step_id: DbId,
    pub command: String,
    pub output: String,
}
