//! Repository for the `code_versions` table.

use chrono::Utc;
use projmem_core::types::DbId;

use crate::models::code_version::{CodeVersion, CreateCodeVersion};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, file_name, version, commit_hash, timestamp";

/// Provides append and query operations for code versions.
///
/// Inserts are not idempotent: every recorded commit is a new audit
/// entry, even with identical arguments.
pub struct CodeVersionRepo;

impl CodeVersionRepo {
    /// Append one code version record, returning the created row.
    pub async fn create(
        pool: &DbPool,
        input: &CreateCodeVersion,
    ) -> Result<CodeVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO code_versions (project_id, file_name, version, commit_hash, timestamp)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CodeVersion>(&query)
            .bind(input.project_id)
            .bind(&input.file_name)
            .bind(input.version)
            .bind(&input.commit_hash)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// List all code versions for a project in insertion order.
    pub async fn list_by_project(
        pool: &DbPool,
        project_id: DbId,
    ) -> Result<Vec<CodeVersion>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM code_versions WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, CodeVersion>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
