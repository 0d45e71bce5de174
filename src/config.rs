//! Process configuration from the environment. `.env` is loaded by `main`
//! before this runs.

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/newsdesk";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_DB_CONNECTIONS: u32 = 5;
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_db_connections: u32,
    /// Request body cap enforced by `RequestBodyLimitLayer`.
    pub max_body_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into()),
            max_db_connections: env_parsed("MAX_DB_CONNECTIONS", DEFAULT_MAX_DB_CONNECTIONS),
            max_body_bytes: env_parsed("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_db_connections: DEFAULT_MAX_DB_CONNECTIONS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
