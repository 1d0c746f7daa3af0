use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GameSession {
    /// Internal surrogate key, referenced by guesses
    pub id: Uuid,
    /// Public session token handed to clients
    pub session_id: String,
    /// Fixed at creation; the schema rejects later changes
    pub target_word_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_completed: bool,
    pub is_won: bool,
    pub guess_count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GameGuess {
    pub id: i32,
    /// Internal id of the owning session (`GameSession::id`)
    pub session_id: Uuid,
    pub guess_number: i32,
    pub guess_word: String,
    /// Opaque per-letter status string, stored as supplied
    pub result: String,
    pub is_correct: bool,
    pub timestamp: DateTime<Utc>,
}

/// Input for appending a guess to a session
#[derive(Debug, Clone)]
pub struct NewGuess {
    pub guess_word: String,
    pub result: String,
    pub is_correct: bool,
}
