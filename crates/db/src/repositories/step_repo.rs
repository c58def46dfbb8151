//! Repository for the `steps` table.

use chrono::Utc;
use projmem_core::types::DbId;

use crate::models::step::{CreateStep, Step};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, description, created_at";

/// Provides operations for steps. Provisioned out-of-band, same as
/// projects.
pub struct StepRepo;

impl StepRepo {
    /// Insert a new step, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateStep) -> Result<Step, sqlx::Error> {
        let query = format!(
            "INSERT INTO steps (project_id, name, description, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Step>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a step by ID within a specific project.
    ///
    /// Returns `None` when the step does not exist or belongs to a
    /// different project, so execution records cannot cross project
    /// boundaries.
    pub async fn find_in_project(
        pool: &DbPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<Step>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM steps WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, Step>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List all steps for a project in insertion order.
    pub async fn list_by_project(pool: &DbPool, project_id: DbId) -> Result<Vec<Step>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM steps WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Step>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
