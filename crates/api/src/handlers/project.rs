//! Handlers for the `/projects` resource.
//!
//! Projects are provisioned out-of-band; the HTTP surface is read-only.

use axum::extract::State;
use axum::Json;
use projmem_db::models::project::Project;
use projmem_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}
