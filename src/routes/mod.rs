pub mod docs;
pub mod game;
pub mod health;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/game/start", axum::routing::post(game::start_game))
        .route(
            "/game/{session_id}",
            get(game::get_game_session).delete(game::end_game_session),
        )
}
