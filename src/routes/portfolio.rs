//! Portfolio content, seeding, and diagnostics routes.

use crate::handlers::{get_diagnostics, get_members, get_projects, get_team, seed_data};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn portfolio_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/team", get(get_team))
        .route("/api/members", get(get_members))
        .route("/api/projects", get(get_projects))
        .route("/api/seed", post(seed_data))
        .route("/test", get(get_diagnostics))
        .with_state(state)
}
