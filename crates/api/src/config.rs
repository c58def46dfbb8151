/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://project_memory.db`).
    pub database_url: String,
    /// Allowed CORS origins for the dashboard, parsed from the
    /// comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// URL probed by the keep-alive task (default: the service's own
    /// health endpoint).
    pub keep_alive_url: String,
    /// Seconds between keep-alive probes (default: `300`).
    pub keep_alive_interval_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                        |
    /// |----------------------------|--------------------------------|
    /// | `HOST`                     | `0.0.0.0`                      |
    /// | `PORT`                     | `8000`                         |
    /// | `DATABASE_URL`             | `sqlite://project_memory.db`   |
    /// | `CORS_ORIGINS`             | `http://localhost:8501`        |
    /// | `KEEP_ALIVE_URL`           | `http://127.0.0.1:<port>/health` |
    /// | `KEEP_ALIVE_INTERVAL_SECS` | `300`                          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://project_memory.db".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:8501".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let keep_alive_url = std::env::var("KEEP_ALIVE_URL")
            .unwrap_or_else(|_| format!("http://127.0.0.1:{port}/health"));

        let keep_alive_interval_secs: u64 = std::env::var("KEEP_ALIVE_INTERVAL_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("KEEP_ALIVE_INTERVAL_SECS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            cors_origins,
            keep_alive_url,
            keep_alive_interval_secs,
        }
    }
}
