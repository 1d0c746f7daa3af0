use crate::{
    error::{ApiError, END_SESSION_FAILED, GET_SESSION_FAILED, START_GAME_FAILED},
    models::{GameSessionResponse, MessageResponse, StartGameResponse},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

/// Tag for grouping game endpoints in the OpenAPI document
pub static GAME_TAG: &str = "game";

/// Start a new game session
///
/// With no valid word available the response is still `200 OK`, but
/// `sessionId` is null and `message` says why.
#[utoipa::path(
    post,
    path = "/api/game/start",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Game started, or no valid word available", body = StartGameResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
)]
pub async fn start_game(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StartGameResponse>, ApiError> {
    tracing::info!("Starting new game");

    let response = state.game.start_new_game().await.map_err(|e| {
        tracing::error!("Error starting game: {}", e);
        ApiError::Internal(START_GAME_FAILED)
    })?;

    if response.is_started() {
        tracing::info!(
            "Game started with session ID: {}",
            response.session_id.as_deref().unwrap_or_default()
        );
    } else {
        tracing::info!("Game not started: {}", response.message);
    }

    Ok(Json(response))
}

/// Get a game session with its guesses
#[utoipa::path(
    get,
    path = "/api/game/{session_id}",
    tag = GAME_TAG,
    params(
        ("session_id" = String, Path, description = "Public session token")
    ),
    responses(
        (status = 200, description = "Game session with guesses in order", body = GameSessionResponse),
        (status = 404, description = "Game session not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
)]
pub async fn get_game_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<GameSessionResponse>, ApiError> {
    tracing::info!("Getting game session: {}", session_id);

    let session = state
        .game
        .get_game_session(&session_id)
        .await
        .map_err(|e| {
            tracing::error!("Error getting game session {}: {}", session_id, e);
            ApiError::Internal(GET_SESSION_FAILED)
        })?;

    session.map(Json).ok_or(ApiError::SessionNotFound)
}

/// Delete a game session and its guesses
#[utoipa::path(
    delete,
    path = "/api/game/{session_id}",
    tag = GAME_TAG,
    params(
        ("session_id" = String, Path, description = "Public session token")
    ),
    responses(
        (status = 204, description = "Game session deleted"),
        (status = 404, description = "Game session not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
)]
pub async fn end_game_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    tracing::info!("Ending game session: {}", session_id);

    let removed = state
        .game
        .end_game_session(&session_id)
        .await
        .map_err(|e| {
            tracing::error!("Error ending game session {}: {}", session_id, e);
            ApiError::Internal(END_SESSION_FAILED)
        })?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::SessionNotFound)
    }
}
