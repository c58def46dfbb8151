//! Error log entity model and DTOs.

use projmem_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An error log row. Populated by external writers; this service only
/// reads them back for a project's history.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ErrorLog {
    pub id: DbId,
    pub project_id: DbId,
    pub step_id: DbId,
    pub error_message: String,
    pub fix_suggestion: Option<String>,
    pub timestamp: Timestamp,
}

/// DTO for the external populate path (and tests).
#[derive(Debug, Clone)]
pub struct CreateErrorLog {
    pub project_id: DbId,
    pub step_id: DbId,
    pub error_message: String,
    pub fix_suggestion: Option<String>,
}
