//! Route definitions for the `/projects` resource and its nested
//! project-scoped audit resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::{code_version, error_log, execution, project, step};
use crate::state::AppState;

/// Routes mounted at `/projects`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/{project_id}/steps", get(step::list_by_project))
        .route(
            "/{project_id}/executions",
            get(execution::list_by_project).post(execution::record),
        )
        .route("/{project_id}/errors", get(error_log::list_by_project))
        .route(
            "/{project_id}/code-versions",
            get(code_version::list_by_project).post(code_version::record),
        )
}
