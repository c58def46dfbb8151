//! Integration tests for the project memory surface: query endpoints,
//! the execution recorder, and the commit recorder.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_app, build_test_app, get, post_json, stub_resolver};
use projmem_db::models::error_log::CreateErrorLog;
use projmem_db::models::project::CreateProject;
use projmem_db::models::step::CreateStep;
use projmem_db::repositories::{ErrorLogRepo, ProjectRepo, StepRepo};
use projmem_db::DbPool;
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Seed one project with one step and return their IDs.
async fn seed_project_with_step(pool: &DbPool, name: &str) -> (i64, i64) {
    let project = ProjectRepo::create(
        pool,
        &CreateProject {
            name: name.to_string(),
        },
    )
    .await
    .expect("create project");
    let step = StepRepo::create(
        pool,
        &CreateStep {
            project_id: project.id,
            name: "build".to_string(),
            description: None,
        },
    )
    .await
    .expect("create step");
    (project.id, step.id)
}

// ---------------------------------------------------------------------------
// Query surface
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_projects_returns_seeded_projects(pool: DbPool) {
    seed_project_with_step(&pool, "alpha").await;
    seed_project_with_step(&pool, "beta").await;

    let response = get(build_app(pool), "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let projects = json.as_array().expect("array body");
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["name"], "alpha");
    assert_eq!(projects[1]["name"], "beta");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn steps_are_scoped_to_the_requested_project(pool: DbPool) {
    let (p1, s1) = seed_project_with_step(&pool, "one").await;
    seed_project_with_step(&pool, "two").await;

    let response = get(build_app(pool), &format!("/api/v1/projects/{p1}/steps")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let steps = json.as_array().expect("array body");
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0]["id"], s1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_project_queries_yield_empty_sequences(pool: DbPool) {
    for uri in [
        "/api/v1/projects/9999/steps",
        "/api/v1/projects/9999/executions",
        "/api/v1/projects/9999/errors",
        "/api/v1/projects/9999/code-versions",
    ] {
        let response = get(build_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json, json!([]), "{uri}");
    }
}

// ---------------------------------------------------------------------------
// Execution recorder
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn record_execution_captures_output_and_persists_one_row(pool: DbPool) {
    let (project_id, step_id) = seed_project_with_step(&pool, "demo").await;

    let response = post_json(
        build_app(pool.clone()),
        &format!("/api/v1/projects/{project_id}/executions"),
        json!({ "step_id": step_id, "command": "echo hello" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["output"], "hello");
    assert_eq!(json["message"], "Logged execution of 'echo hello'");

    let listed = body_json(
        get(
            build_app(pool),
            &format!("/api/v1/projects/{project_id}/executions"),
        )
        .await,
    )
    .await;
    let logs = listed.as_array().expect("array body");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["command"], "echo hello");
    assert_eq!(logs[0]["output"], "hello");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn failed_command_is_error_tagged_and_still_recorded(pool: DbPool) {
    let (project_id, step_id) = seed_project_with_step(&pool, "failing").await;

    let response = post_json(
        build_app(pool.clone()),
        &format!("/api/v1/projects/{project_id}/executions"),
        json!({ "step_id": step_id, "command": "exit 1" }),
    )
    .await;

    // A failing command is not an HTTP error; the failure lives in the
    // output payload.
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["output"], "ERROR: ");

    let listed = body_json(
        get(
            build_app(pool),
            &format!("/api/v1/projects/{project_id}/executions"),
        )
        .await,
    )
    .await;
    let logs = listed.as_array().expect("array body");
    assert_eq!(logs.len(), 1);
    assert!(logs[0]["output"]
        .as_str()
        .expect("output string")
        .starts_with("ERROR: "));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn failed_command_output_text_is_preserved(pool: DbPool) {
    let (project_id, step_id) = seed_project_with_step(&pool, "verbose-failure").await;

    let response = post_json(
        build_app(pool),
        &format!("/api/v1/projects/{project_id}/executions"),
        json!({ "step_id": step_id, "command": "echo broken; exit 1" }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["output"], "ERROR: broken");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn record_execution_for_unknown_project_is_404_and_writes_nothing(pool: DbPool) {
    let response = post_json(
        build_app(pool.clone()),
        "/api/v1/projects/9999/executions",
        json!({ "step_id": 1, "command": "echo hello" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let listed = body_json(get(build_app(pool), "/api/v1/projects/9999/executions").await).await;
    assert_eq!(listed, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn record_execution_rejects_steps_from_other_projects(pool: DbPool) {
    let (p1, _s1) = seed_project_with_step(&pool, "one").await;
    let (_p2, s2) = seed_project_with_step(&pool, "two").await;

    let response = post_json(
        build_app(pool),
        &format!("/api/v1/projects/{p1}/executions"),
        json!({ "step_id": s2, "command": "echo hello" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn concurrent_executions_both_persist(pool: DbPool) {
    let (project_id, step_id) = seed_project_with_step(&pool, "parallel").await;
    let uri = format!("/api/v1/projects/{project_id}/executions");

    let (first, second) = tokio::join!(
        post_json(
            build_app(pool.clone()),
            &uri,
            json!({ "step_id": step_id, "command": "echo first" }),
        ),
        post_json(
            build_app(pool.clone()),
            &uri,
            json!({ "step_id": step_id, "command": "echo second" }),
        ),
    );
    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::CREATED);

    let listed = body_json(get(build_app(pool), &uri).await).await;
    let logs = listed.as_array().expect("array body");
    assert_eq!(logs.len(), 2);
    assert_ne!(logs[0]["id"], logs[1]["id"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn timed_out_command_is_error_tagged_and_recorded(pool: DbPool) {
    let (project_id, step_id) = seed_project_with_step(&pool, "slow").await;

    let response = post_json(
        build_app(pool.clone()),
        &format!("/api/v1/projects/{project_id}/executions"),
        json!({ "step_id": step_id, "command": "sleep 30", "timeout_secs": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["output"], "ERROR: command timed out after 1s");

    let listed = body_json(
        get(
            build_app(pool),
            &format!("/api/v1/projects/{project_id}/executions"),
        )
        .await,
    )
    .await;
    let logs = listed.as_array().expect("array body");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["output"], "ERROR: command timed out after 1s");
}

// ---------------------------------------------------------------------------
// Error logs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn error_logs_are_surfaced_per_project(pool: DbPool) {
    let (project_id, step_id) = seed_project_with_step(&pool, "errors").await;
    ErrorLogRepo::create(
        &pool,
        &CreateErrorLog {
            project_id,
            step_id,
            error_message: "compile failed".to_string(),
            fix_suggestion: Some("install the linker".to_string()),
        },
    )
    .await
    .expect("create error log");

    let listed = body_json(
        get(
            build_app(pool),
            &format!("/api/v1/projects/{project_id}/errors"),
        )
        .await,
    )
    .await;
    let errors = listed.as_array().expect("array body");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["error_message"], "compile failed");
    assert_eq!(errors[0]["fix_suggestion"], "install the linker");
}

// ---------------------------------------------------------------------------
// Commit recorder
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn record_commit_persists_resolved_revision(pool: DbPool) {
    let (project_id, _) = seed_project_with_step(&pool, "versioned").await;
    let dir = tempfile::tempdir().expect("tempdir");
    let resolver = stub_resolver(&dir, "echo abc123def");

    let response = post_json(
        build_test_app(pool.clone(), resolver),
        &format!("/api/v1/projects/{project_id}/code-versions"),
        json!({ "file_name": "a.txt", "version": 3 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["commit_hash"], "abc123def");
    assert_eq!(json["message"], "Logged commit abc123def for a.txt");

    let listed = body_json(
        get(
            build_app(pool),
            &format!("/api/v1/projects/{project_id}/code-versions"),
        )
        .await,
    )
    .await;
    let versions = listed.as_array().expect("array body");
    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0]["file_name"], "a.txt");
    assert_eq!(versions[0]["version"], 3);
    assert_eq!(versions[0]["commit_hash"], "abc123def");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn record_commit_with_unavailable_revision_writes_nothing(pool: DbPool) {
    let (project_id, _) = seed_project_with_step(&pool, "unversioned").await;
    let uri = format!("/api/v1/projects/{project_id}/code-versions");

    let before = body_json(get(build_app(pool.clone()), &uri).await).await;
    assert_eq!(before, json!([]));

    // The stub resolver in `build_app` always fails.
    let response = post_json(
        build_app(pool.clone()),
        &uri,
        json!({ "file_name": "a.txt", "version": 3 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "REVISION_UNAVAILABLE");

    let after = body_json(get(build_app(pool), &uri).await).await;
    assert_eq!(after, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn record_commit_for_unknown_project_is_404(pool: DbPool) {
    let dir = tempfile::tempdir().expect("tempdir");
    let resolver = stub_resolver(&dir, "echo abc123def");

    let response = post_json(
        build_test_app(pool, resolver),
        "/api/v1/projects/9999/code-versions",
        json!({ "file_name": "a.txt", "version": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Query semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn repeated_queries_without_writes_are_identical(pool: DbPool) {
    let (project_id, step_id) = seed_project_with_step(&pool, "stable").await;
    let uri = format!("/api/v1/projects/{project_id}/executions");

    post_json(
        build_app(pool.clone()),
        &uri,
        json!({ "step_id": step_id, "command": "echo once" }),
    )
    .await;

    let first = body_json(get(build_app(pool.clone()), &uri).await).await;
    let second = body_json(get(build_app(pool), &uri).await).await;
    assert_eq!(first, second);
}
