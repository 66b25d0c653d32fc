//! GET /test — backend and store status. Never fails; every problem becomes text in the body.

use crate::state::AppState;
use crate::store::DocumentStore;
use axum::{extract::State, Json};
use serde::Serialize;
use std::fmt;

/// Collections listed in the report.
pub const COLLECTION_SAMPLE: u32 = 10;
const ERROR_TEXT_LIMIT: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatabaseStatus {
    Uninitialized,
    Connected,
    ConnectedWithError(String),
    Error(String),
}

impl fmt::Display for DatabaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseStatus::Uninitialized => f.write_str("⚠️  Available but not initialized"),
            DatabaseStatus::Connected => f.write_str("✅ Connected & Working"),
            DatabaseStatus::ConnectedWithError(e) => write!(f, "⚠️  Connected but Error: {}", e),
            DatabaseStatus::Error(e) => write!(f, "❌ Error: {}", e),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DiagnosticsBody {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn truncate(text: &str) -> String {
    text.chars().take(ERROR_TEXT_LIMIT).collect()
}

fn presence(set: bool) -> String {
    let label = if set { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}

struct Probe {
    status: DatabaseStatus,
    connected: bool,
    collections: Vec<String>,
}

async fn probe(store: Option<&dyn DocumentStore>) -> Probe {
    let Some(store) = store else {
        return Probe {
            status: DatabaseStatus::Uninitialized,
            connected: false,
            collections: Vec::new(),
        };
    };
    if let Err(e) = store.name() {
        return Probe {
            status: DatabaseStatus::Error(truncate(&e.to_string())),
            connected: false,
            collections: Vec::new(),
        };
    }
    match store.list_collection_names(COLLECTION_SAMPLE).await {
        Ok(mut names) => {
            names.truncate(COLLECTION_SAMPLE as usize);
            Probe {
                status: DatabaseStatus::Connected,
                connected: true,
                collections: names,
            }
        }
        Err(e) => Probe {
            status: DatabaseStatus::ConnectedWithError(truncate(&e.to_string())),
            connected: true,
            collections: Vec::new(),
        },
    }
}

pub async fn get_diagnostics(State(state): State<AppState>) -> Json<DiagnosticsBody> {
    let probe = probe(state.store()).await;
    tracing::debug!(database = %probe.status, "diagnostics");
    Json(DiagnosticsBody {
        backend: "✅ Running".into(),
        database: probe.status.to_string(),
        database_url: presence(state.config.database_url.is_some()),
        database_name: presence(state.config.database_name.is_some()),
        connection_status: if probe.connected { "Connected" } else { "Not Connected" }.into(),
        collections: probe.collections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_is_truncated_on_char_boundary() {
        let long = "é".repeat(80);
        assert_eq!(truncate(&long).chars().count(), ERROR_TEXT_LIMIT);
    }

    #[test]
    fn status_labels() {
        assert_eq!(DatabaseStatus::Connected.to_string(), "✅ Connected & Working");
        assert_eq!(DatabaseStatus::Error("boom".into()).to_string(), "❌ Error: boom");
        assert_eq!(
            DatabaseStatus::Uninitialized.to_string(),
            "⚠️  Available but not initialized"
        );
    }
}
