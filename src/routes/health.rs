use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let database = if state.game.store_healthy().await {
        "ok"
    } else {
        "unavailable"
    };

    Json(json!({
        "status": "ok",
        "service": "anagramme-backend",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database
    }))
}
