//! Portfolio handlers: team, members, projects, and seeding.

use crate::error::AppError;
use crate::response::{many_or_error, one_or_error, seed_status, SeedBody};
use crate::service::{find_one, get_documents, seed_sample_data, shape_document, shape_documents};
use crate::state::AppState;
use crate::store::Collection;
use axum::{extract::State, Json};
use serde_json::{Map, Value};

async fn list_shaped(state: &AppState, collection: Collection) -> Result<Vec<Map<String, Value>>, AppError> {
    let store = state.store().ok_or_else(AppError::not_configured)?;
    let docs = get_documents(store, collection, &Map::new(), None).await?;
    Ok(shape_documents(docs))
}

/// Limit-1 read. Extra documents in the collection are ignored.
async fn first_shaped(state: &AppState, collection: Collection) -> Result<Map<String, Value>, AppError> {
    let store = state.store().ok_or_else(AppError::not_configured)?;
    Ok(shape_document(find_one(store, collection).await?))
}

/// GET /api/team — the first team document, or `{}` when none exists.
pub async fn get_team(State(state): State<AppState>) -> Json<Value> {
    one_or_error("team", first_shaped(&state, Collection::Team).await)
}

/// GET /api/members
pub async fn get_members(State(state): State<AppState>) -> Json<Value> {
    many_or_error("members", list_shaped(&state, Collection::Member).await)
}

/// GET /api/projects
pub async fn get_projects(State(state): State<AppState>) -> Json<Value> {
    many_or_error("projects", list_shaped(&state, Collection::Project).await)
}

/// POST /api/seed — fill empty collections with sample content.
pub async fn seed_data(State(state): State<AppState>) -> Json<SeedBody> {
    seed_status(seed_sample_data(state.store()).await)
}
