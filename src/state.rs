//! Shared application state for all routes.

use crate::config::AppConfig;
use crate::store::DocumentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no store could be configured at startup; handlers treat that as an input, not a panic.
    pub store: Option<Arc<dyn DocumentStore>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, config: AppConfig) -> Self {
        AppState {
            store,
            config: Arc::new(config),
        }
    }

    pub fn store(&self) -> Option<&dyn DocumentStore> {
        self.store.as_deref()
    }
}
