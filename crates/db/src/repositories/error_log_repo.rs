//! Repository for the `error_logs` table.

use chrono::Utc;
use projmem_core::types::DbId;

use crate::models::error_log::{CreateErrorLog, ErrorLog};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, step_id, error_message, fix_suggestion, timestamp";

/// Provides query operations for error logs, plus the insert used by
/// the external populate path. The service's own request flow never
/// writes here.
pub struct ErrorLogRepo;

impl ErrorLogRepo {
    /// Append one error record, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateErrorLog) -> Result<ErrorLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO error_logs (project_id, step_id, error_message, fix_suggestion, timestamp)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ErrorLog>(&query)
            .bind(input.project_id)
            .bind(input.step_id)
            .bind(&input.error_message)
            .bind(&input.fix_suggestion)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// List all error logs for a project in insertion order.
    pub async fn list_by_project(
        pool: &DbPool,
        project_id: DbId,
    ) -> Result<Vec<ErrorLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM error_logs WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, ErrorLog>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
