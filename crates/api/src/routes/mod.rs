pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                              GET   list projects
/// /projects/{project_id}/steps           GET   list steps
/// /projects/{project_id}/executions      GET   list execution logs
///                                        POST  run + record a command
/// /projects/{project_id}/errors          GET   list error logs
/// /projects/{project_id}/code-versions   GET   list code versions
///                                        POST  record current revision
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
