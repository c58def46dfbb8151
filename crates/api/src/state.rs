use std::sync::Arc;

use projmem_core::vcs::RevisionResolver;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: projmem_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Resolver for the current source revision.
    pub resolver: Arc<RevisionResolver>,
}
