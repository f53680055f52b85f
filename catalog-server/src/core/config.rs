/// Server configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Env var | Default | Meaning |
/// |---------|---------|---------|
/// | WORK_DIR | /var/lib/catalog-server | durable store root |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | FEED_URL | https://fakestoreapi.com | product feed base URL |
/// | FEED_TIMEOUT_MS | 30000 | feed request timeout (ms) |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | optional rolling file log dir |
/// | ENVIRONMENT | development | environment tag |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/catalog HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding the durable store and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Base URL of the external product feed
    pub feed_base_url: String,
    /// Feed request timeout in milliseconds
    pub feed_timeout_ms: u64,
    /// Tracing max level
    pub log_level: String,
    /// Optional directory for rolling file logs
    pub log_dir: Option<String>,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables,
    /// falling back to defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| "/var/lib/catalog-server".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            feed_base_url: std::env::var("FEED_URL")
                .unwrap_or_else(|_| "https://fakestoreapi.com".into()),
            feed_timeout_ms: std::env::var("FEED_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}
