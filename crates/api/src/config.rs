use zikcut_pipeline::thumbnails::DEFAULT_THUMBNAIL_CONCURRENCY;

/// Default request body limit: 32 MiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development next to the
/// dashboard dev server. Override via environment variables in production.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `120`). Media generation is slow.
    pub request_timeout_secs: u64,
    /// Per-idea image calls in flight during a thumbnail batch (default: `2`, minimum `1`).
    pub thumbnail_concurrency: usize,
    /// Largest accepted request body in bytes (default: 32 MiB).
    ///
    /// Must fit four base64-encoded 5 MiB reference images plus the rest of
    /// the request.
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:9002` |
    /// | `REQUEST_TIMEOUT_SECS`  | `120`                   |
    /// | `THUMBNAIL_CONCURRENCY` | `2`                     |
    /// | `MAX_BODY_BYTES`        | `33554432` (32 MiB)     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:9002".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let thumbnail_concurrency: usize = std::env::var("THUMBNAIL_CONCURRENCY")
            .unwrap_or_else(|_| DEFAULT_THUMBNAIL_CONCURRENCY.to_string())
            .parse::<usize>()
            .expect("THUMBNAIL_CONCURRENCY must be a valid usize")
            .max(1);

        let max_body_bytes: usize = std::env::var("MAX_BODY_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_BODY_BYTES.to_string())
            .parse()
            .expect("MAX_BODY_BYTES must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            thumbnail_concurrency,
            max_body_bytes,
        }
    }
}
