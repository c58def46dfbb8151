//! Step entity model and DTOs.

use projmem_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A step row from the `steps` table: one logical unit of work within a
/// project, referenced by execution and error logs.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Step {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for provisioning a step (out-of-band, same as projects).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStep {
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
}
