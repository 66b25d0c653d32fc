//! Portfolio API server: reads config from the environment, connects the document store if
//! one is configured, and serves the router.
//!
//! Run from repo root: `cargo run -p portfolio-server`

use portfolio_api::{app, ensure_database_exists, AppConfig, AppState, DocumentStore, PgDocumentStore};
use std::sync::Arc;
use tokio::net::TcpListener;

async fn connect_store(config: &AppConfig) -> Option<Arc<dyn DocumentStore>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set; serving without a document store");
        return None;
    };
    let connected = async {
        ensure_database_exists(database_url).await?;
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(database_url)
            .await?;
        let store = PgDocumentStore::new(pool, config.database_name_or_default());
        store.ensure_collections().await?;
        Ok::<_, portfolio_api::AppError>(store)
    }
    .await;
    match connected {
        Ok(store) => {
            tracing::info!(database = config.database_name_or_default(), "document store ready");
            Some(Arc::new(store))
        }
        Err(e) => {
            tracing::warn!(error = %e, "document store unavailable; serving without it");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("portfolio_api=info,portfolio_server=info,tower_http=info")
            }),
        )
        .init();

    let config = AppConfig::from_env()?;
    let store = connect_store(&config).await;
    let listener = TcpListener::bind(config.bind_addr()).await?;
    let state = AppState::new(store, config);

    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
