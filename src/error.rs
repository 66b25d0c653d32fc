//! Typed errors. Domain handlers never hand these to axum; `response` renders them inline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Store missing or misconfigured.
    #[error("{0}")]
    Config(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    /// Backend failure not originating from sqlx (e.g. the in-memory store).
    #[error("store: {0}")]
    Store(String),
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn not_configured() -> Self {
        AppError::Config("Database not configured".into())
    }

    /// Stable kind string used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config_error",
            AppError::NotFound(_) => "not_found",
            AppError::Validation(_) => "validation_error",
            AppError::Db(sqlx::Error::RowNotFound) => "not_found",
            AppError::Db(_) | AppError::Store(_) => "store_error",
            AppError::Serialization(_) => "serialization_error",
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == "not_found"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_message_mentions_database() {
        let err = AppError::not_configured();
        assert_eq!(err.to_string(), "Database not configured");
        assert_eq!(err.code(), "config_error");
    }

    #[test]
    fn row_not_found_counts_as_not_found() {
        assert!(AppError::Db(sqlx::Error::RowNotFound).is_not_found());
        assert!(AppError::NotFound("team".into()).is_not_found());
        assert!(!AppError::Store("down".into()).is_not_found());
    }
}
