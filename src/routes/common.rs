//! Common routes: greetings, health, version.

use crate::response::MessageBody;
use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn root() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Hello from the portfolio backend!",
    })
}

async fn hello() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Hello from the backend API!",
    })
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Common routes (no state): GET /, GET /api/hello, GET /health, GET /version.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/hello", get(hello))
        .route("/health", get(health))
        .route("/version", get(version))
}
