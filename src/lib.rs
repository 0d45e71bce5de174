//! Newsdesk: news article REST backend with PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod queries;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::ApiError;
pub use routes::{api_routes, app, service_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
