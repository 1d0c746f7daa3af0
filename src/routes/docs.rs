use axum::Json;
use utoipa::OpenApi;

use super::game;
use crate::models::{GameGuessResponse, GameSessionResponse, MessageResponse, StartGameResponse};

#[derive(OpenApi)]
#[openapi(
    info(title = "Anagramme API", description = "Word-guessing game backend"),
    paths(game::start_game, game::get_game_session, game::end_game_session),
    components(schemas(
        StartGameResponse,
        GameSessionResponse,
        GameGuessResponse,
        MessageResponse
    )),
    tags((name = "game", description = "Game session endpoints"))
)]
pub struct ApiDoc;

/// Serve the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
