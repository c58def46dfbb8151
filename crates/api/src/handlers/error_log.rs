//! Handlers for the project-scoped `/errors` resource.
//!
//! Error logs are written by external collaborators; this service only
//! surfaces them for querying.

use axum::extract::{Path, State};
use axum::Json;
use projmem_core::types::DbId;
use projmem_db::models::error_log::ErrorLog;
use projmem_db::repositories::ErrorLogRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/errors
///
/// An unknown project yields an empty sequence, not an error.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ErrorLog>>> {
    let errors = ErrorLogRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(errors))
}
