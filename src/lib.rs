//! Portfolio API: team, member and project documents served as JSON over HTTP.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod schemas;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use routes::{app, common_routes, portfolio_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, Collection, DocumentStore, MemoryStore, PgDocumentStore};
