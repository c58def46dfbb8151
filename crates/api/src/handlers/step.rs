//! Handlers for the project-scoped `/steps` resource.

use axum::extract::{Path, State};
use axum::Json;
use projmem_core::types::DbId;
use projmem_db::models::step::Step;
use projmem_db::repositories::StepRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/steps
///
/// An unknown project yields an empty sequence, not an error.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Step>>> {
    let steps = StepRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(steps))
}
