//! Player HTTP Routes
//!
//! Endpoints for player record CRUD and the fixed aggregate queries.
//!
//! Request bodies are loosely-typed JSON taken at face value: no field
//! whitelist, no required fields, no range checks. Whatever the caller
//! sends is what the store keeps.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog;
use crate::store::PlayerStore;

use super::errors::ApiResult;

// ==================
// Shared State
// ==================

/// Player state shared across handlers
pub struct PlayerState {
    pub store: Arc<PlayerStore>,
}

impl PlayerState {
    pub fn new(store: Arc<PlayerStore>) -> Self {
        Self { store }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct AddPlayerResponse {
    pub message: String,
    pub player: Value,
}

#[derive(Debug, Serialize)]
pub struct UpdatePlayerResponse {
    pub message: String,
    #[serde(rename = "modifiedCount")]
    pub modified_count: u64,
}

#[derive(Debug, Serialize)]
pub struct DeletePlayerResponse {
    pub message: String,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct LegacyQueryRequest {
    #[serde(default)]
    pub query_type: Option<String>,
}

// ==================
// Player Routes
// ==================

/// Create player routes
pub fn player_routes(state: Arc<PlayerState>) -> Router {
    Router::new()
        .route("/addPlayer", post(add_player_handler))
        .route("/updatePlayer/{playerName}", put(update_player_handler))
        .route("/deletePlayer/{playerName}", delete(delete_player_handler))
        .route("/performQuery/{queryType}", get(perform_query_handler))
        .route("/perform_query", post(legacy_query_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Add a player record with whatever fields the body carries
async fn add_player_handler(
    State(state): State<Arc<PlayerState>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<AddPlayerResponse>> {
    let player = state.store.insert(body)?;

    Ok(Json(AddPlayerResponse {
        message: "Player added successfully".to_string(),
        player,
    }))
}

/// Merge partial fields into the first record matching the path name
///
/// A zero modified count (no such player) is still a 200.
async fn update_player_handler(
    State(state): State<Arc<PlayerState>>,
    Path(player_name): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<UpdatePlayerResponse>> {
    let modified_count = state.store.update_one(&player_name, &body)?;

    Ok(Json(UpdatePlayerResponse {
        message: format!("Player {} updated successfully", player_name),
        modified_count,
    }))
}

/// Delete the first record matching the path name
///
/// A zero deleted count (no such player) is still a 200.
async fn delete_player_handler(
    State(state): State<Arc<PlayerState>>,
    Path(player_name): Path<String>,
) -> ApiResult<Json<DeletePlayerResponse>> {
    let deleted_count = state.store.delete_one(&player_name)?;

    Ok(Json(DeletePlayerResponse {
        message: format!("Player {} deleted successfully", player_name),
        deleted_count,
    }))
}

/// Run a fixed-vocabulary query
///
/// A matched token returns a JSON array (even when the store is empty);
/// an unmatched token returns the empty object `{}`, not an array and not
/// an error. Clients depend on that asymmetry.
async fn perform_query_handler(
    State(state): State<Arc<PlayerState>>,
    Path(query_type): Path<String>,
) -> ApiResult<Json<Value>> {
    match catalog::resolve(&query_type) {
        Some(descriptor) => {
            let records = state
                .store
                .find_sorted(descriptor.field, descriptor.direction, descriptor.limit)?;
            Ok(Json(Value::Array(records)))
        }
        None => Ok(Json(Value::Object(Map::new()))),
    }
}

/// Run a legacy-vocabulary query (body-carried token)
///
/// An unmatched or missing token returns JSON `null`.
async fn legacy_query_handler(
    State(state): State<Arc<PlayerState>>,
    Json(request): Json<LegacyQueryRequest>,
) -> ApiResult<Json<Value>> {
    let descriptor = request
        .query_type
        .as_deref()
        .and_then(catalog::resolve_legacy);

    match descriptor {
        Some(descriptor) => {
            let records = state
                .store
                .find_sorted(descriptor.field, descriptor.direction, descriptor.limit)?;
            Ok(Json(Value::Array(records)))
        }
        None => Ok(Json(Value::Null)),
    }
}
