//! Process configuration read from the environment (and `.env` via dotenvy in the server).

use crate::error::ConfigError;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

/// Store name used when `DATABASE_NAME` is unset.
pub const DEFAULT_DATABASE_NAME: &str = "portfolio";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: None,
            database_name: None,
            host: "0.0.0.0".into(),
            port: 8000,
            max_connections: 5,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = AppConfig::default();

        let port = match get("PORT") {
            Some(v) => v
                .parse()
                .map_err(|_| ConfigError::InvalidVar { name: "PORT", value: v })?,
            None => defaults.port,
        };
        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidVar {
                name: "DATABASE_MAX_CONNECTIONS",
                value: v,
            })?,
            None => defaults.max_connections,
        };

        Ok(AppConfig {
            database_url: get(DATABASE_URL_VAR),
            database_name: get(DATABASE_NAME_VAR),
            host: get("HOST").unwrap_or(defaults.host),
            port,
            max_connections,
        })
    }

    pub fn database_name_or_default(&self) -> &str {
        self.database_name.as_deref().unwrap_or(DEFAULT_DATABASE_NAME)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
