use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use projmem_api::config::ServerConfig;
use projmem_api::routes;
use projmem_api::state::AppState;
use projmem_core::vcs::RevisionResolver;
use projmem_db::DbPool;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:8501".to_string()],
        keep_alive_url: "http://127.0.0.1:0/health".to_string(),
        keep_alive_interval_secs: 300,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and revision resolver.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, tracing, panic
/// recovery) that production uses. The keep-alive task is not spawned;
/// it is independent of request handling by design.
pub fn build_test_app(pool: DbPool, resolver: RevisionResolver) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        resolver: Arc::new(resolver),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:8501".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Build the app with a resolver that will never succeed (tests that do
/// not touch the commit recorder).
pub fn build_app(pool: DbPool) -> Router {
    build_test_app(pool, RevisionResolver::with_program("/nonexistent/vcs"))
}

/// Write an executable stub script into `dir` and return a resolver
/// that invokes it in place of `git`.
pub fn stub_resolver(dir: &tempfile::TempDir, body: &str) -> RevisionResolver {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.path().join("fake-vcs");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write stub");
    let mut perms = std::fs::metadata(&path).expect("stat stub").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod stub");
    RevisionResolver::with_program(path.to_string_lossy())
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("build request"),
    )
    .await
    .expect("send request")
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("build request"),
    )
    .await
    .expect("send request")
}

/// Decode a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("parse body as JSON")
}
