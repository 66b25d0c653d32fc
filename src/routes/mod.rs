//! Router assembly. CORS is fully open: any origin, method, and header, with credentials.

pub mod common;
pub mod portfolio;

pub use common::common_routes;
pub use portfolio::portfolio_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(portfolio_routes(state))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
