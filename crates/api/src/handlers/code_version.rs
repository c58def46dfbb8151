//! Handlers for the project-scoped `/code-versions` resource: the
//! commit recorder and its query surface.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use projmem_core::error::CoreError;
use projmem_core::types::DbId;
use projmem_db::models::code_version::{CodeVersion, CreateCodeVersion};
use projmem_db::repositories::{CodeVersionRepo, ProjectRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for recording a code version.
#[derive(Debug, Deserialize)]
pub struct RecordCommit {
    pub file_name: String,
    pub version: i64,
}

/// Response payload for a recorded commit.
#[derive(Debug, Serialize)]
pub struct CommitRecorded {
    pub message: String,
    pub commit_hash: String,
}

/// GET /api/v1/projects/{project_id}/code-versions
///
/// An unknown project yields an empty sequence, not an error.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<CodeVersion>>> {
    let versions = CodeVersionRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(versions))
}

/// POST /api/v1/projects/{project_id}/code-versions
///
/// Resolves the current revision first; if resolution fails, nothing is
/// written and the caller gets a typed failure. Otherwise exactly one
/// row is inserted. Repeated calls append new audit rows.
pub async fn record(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<RecordCommit>,
) -> AppResult<(StatusCode, Json<CommitRecorded>)> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let commit_hash = state
        .resolver
        .resolve()
        .await
        .ok_or(AppError::Core(CoreError::RevisionUnavailable))?;

    let row = CodeVersionRepo::create(
        &state.pool,
        &CreateCodeVersion {
            project_id,
            file_name: input.file_name,
            version: input.version,
            commit_hash,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CommitRecorded {
            message: format!("Logged commit {} for {}", row.commit_hash, row.file_name),
            commit_hash: row.commit_hash,
        }),
    ))
}
