//! Code version entity model and DTOs.

use projmem_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A code version row: a named artifact/version pair bound to the
/// revision that was current when it was recorded.
///
/// `commit_hash` is never empty; the commit recorder refuses to write a
/// row without a resolved revision, and the schema enforces it too.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CodeVersion {
    pub id: DbId,
    pub project_id: DbId,
    pub file_name: String,
    pub version: i64,
    pub commit_hash: String,
    pub timestamp: Timestamp,
}

/// DTO for recording a code version. Built by the commit recorder once
/// a revision has been resolved.
#[derive(Debug, Clone)]
pub struct CreateCodeVersion {
    pub project_id: DbId,
    pub file_name: String,
    pub version: i64,
    pub commit_hash: String,
}
