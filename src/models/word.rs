use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A candidate target word. Seed/admin data, read-only from the game's side.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Word {
    pub id: i32,
    /// Uppercase word text, unique across the table
    pub word_text: String,
    pub is_valid: bool,
    pub difficulty: i32,
    pub created_at: DateTime<Utc>,
}
