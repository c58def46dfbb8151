//! Repository for the `execution_logs` table.

use chrono::Utc;
use projmem_core::types::DbId;

use crate::models::execution_log::{CreateExecutionLog, ExecutionLog};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, step_id, command, output, timestamp";

/// Provides append and query operations for execution logs.
///
/// The table is append-only: there is deliberately no update or delete
/// method here.
pub struct ExecutionLogRepo;

impl ExecutionLogRepo {
    /// Append one execution record, returning the created row.
    ///
    /// The timestamp is bound at insert time, so per-project ordering
    /// follows insert order.
    pub async fn create(
        pool: &DbPool,
        input: &CreateExecutionLog,
    ) -> Result<ExecutionLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO execution_logs (project_id, step_id, command, output, timestamp)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExecutionLog>(&query)
            .bind(input.project_id)
            .bind(input.step_id)
            .bind(&input.command)
            .bind(&input.output)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// List all execution logs for a project in insertion order.
    pub async fn list_by_project(
        pool: &DbPool,
        project_id: DbId,
    ) -> Result<Vec<ExecutionLog>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM execution_logs WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, ExecutionLog>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
