//! Project entity model and DTOs.

use projmem_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// Projects are the root of every audit record; all other entities
/// reference one via `project_id`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for provisioning a project.
///
/// Provisioning happens out-of-band (seed scripts, tests); the HTTP
/// surface only reads projects.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
}
