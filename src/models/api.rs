use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{GameGuess, GameSession};

pub const GAME_STARTED_MESSAGE: &str = "Game started successfully!";
pub const NO_VALID_WORDS_MESSAGE: &str = "No valid words available to start a game.";

/// Response for `POST /api/game/start`
///
/// When no valid word exists the game is not started: `session_id` and
/// `start_time` are `None` and `message` explains why. Callers must check
/// the token rather than the status code.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartGameResponse {
    pub session_id: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub max_guesses: u32,
    pub word_length: usize,
    pub message: String,
}

impl StartGameResponse {
    pub fn started(session: &GameSession, max_guesses: u32, word_length: usize) -> Self {
        Self {
            session_id: Some(session.session_id.clone()),
            start_time: Some(session.start_time),
            max_guesses,
            word_length,
            message: GAME_STARTED_MESSAGE.to_string(),
        }
    }

    pub fn no_valid_words(max_guesses: u32, word_length: usize) -> Self {
        Self {
            session_id: None,
            start_time: None,
            max_guesses,
            word_length,
            message: NO_VALID_WORDS_MESSAGE.to_string(),
        }
    }

    pub fn is_started(&self) -> bool {
        self.session_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// Session payload for `GET /api/game/{sessionId}`. The target word text is
/// never part of it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameSessionResponse {
    pub id: Uuid,
    pub session_id: String,
    pub target_word_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_completed: bool,
    pub is_won: bool,
    pub guess_count: i32,
    pub guesses: Vec<GameGuessResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameGuessResponse {
    pub id: i32,
    pub session_id: Uuid,
    pub guess_number: i32,
    pub guess_word: String,
    pub result: String,
    pub is_correct: bool,
    pub timestamp: DateTime<Utc>,
}

impl From<GameGuess> for GameGuessResponse {
    fn from(guess: GameGuess) -> Self {
        Self {
            id: guess.id,
            session_id: guess.session_id,
            guess_number: guess.guess_number,
            guess_word: guess.guess_word,
            result: guess.result,
            is_correct: guess.is_correct,
            timestamp: guess.timestamp,
        }
    }
}

impl GameSessionResponse {
    pub fn new(session: GameSession, guesses: Vec<GameGuess>) -> Self {
        Self {
            id: session.id,
            session_id: session.session_id,
            target_word_id: session.target_word_id,
            start_time: session.start_time,
            end_time: session.end_time,
            is_completed: session.is_completed,
            is_won: session.is_won,
            guess_count: session.guess_count,
            guesses: guesses.into_iter().map(GameGuessResponse::from).collect(),
        }
    }
}

/// Body of every error response: `{"message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
