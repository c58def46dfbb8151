//! Handlers for the project-scoped `/executions` resource: the
//! execution recorder and its query surface.

use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use projmem_core::error::CoreError;
use projmem_core::exec;
use projmem_core::types::DbId;
use projmem_db::models::execution_log::{CreateExecutionLog, ExecutionLog};
use projmem_db::repositories::{ExecutionLogRepo, ProjectRepo, StepRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for recording an execution.
#[derive(Debug, Deserialize)]
pub struct RecordExecution {
    pub step_id: DbId,
    pub command: String,
    /// Optional deadline in seconds. Absent means the command may block
    /// indefinitely, matching the recorder's original contract.
    pub timeout_secs: Option<u64>,
}

/// Response payload for a recorded execution.
#[derive(Debug, Serialize)]
pub struct ExecutionRecorded {
    pub message: String,
    pub output: String,
}

/// GET /api/v1/projects/{project_id}/executions
///
/// An unknown project yields an empty sequence, not an error.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ExecutionLog>>> {
    let logs = ExecutionLogRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(logs))
}

/// POST /api/v1/projects/{project_id}/executions
///
/// Runs the command, waits for it to terminate, then persists exactly
/// one log row. A failing command is not an HTTP error: its output is
/// error-tagged and recorded all the same, so failures stay auditable.
/// Only a store failure aborts the request.
pub async fn record(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<RecordExecution>,
) -> AppResult<(StatusCode, Json<ExecutionRecorded>)> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    StepRepo::find_in_project(&state.pool, project_id, input.step_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Step",
            id: input.step_id,
        }))?;

    tracing::debug!(project_id, step_id = input.step_id, command = %input.command, "Executing command");

    let timeout = input.timeout_secs.map(Duration::from_secs);
    let result = exec::run_shell(&input.command, timeout).await;
    match &result {
        Ok(out) => tracing::debug!(
            exit_code = out.exit_code,
            duration_ms = out.duration_ms,
            "Command terminated"
        ),
        Err(err) => tracing::warn!(error = %err, "Command did not complete"),
    }
    let output = exec::fold_output(result);

    // The insert happens-after command termination; if the process dies
    // in between, the execution is simply not recorded (accepted risk,
    // no write-ahead log).
    ExecutionLogRepo::create(
        &state.pool,
        &CreateExecutionLog {
            project_id,
            step_id: input.step_id,
            command: input.command.clone(),
            output: output.clone(),
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ExecutionRecorded {
            message: format!("Logged execution of '{}'", input.command),
            output,
        }),
    ))
}
