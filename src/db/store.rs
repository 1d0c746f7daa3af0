//! Persistence gateway for words, sessions and guesses.
//!
//! Handlers and the game service only talk to [`GameStore`]. The production
//! implementation is [`PgGameStore`]; tests use the in-memory store in
//! `db::memory`, which enforces the same relational rules.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::queries;
use crate::error::{StoreError, StoreResult};
use crate::models::{GameGuess, GameSession, NewGuess, Word};

#[async_trait]
pub trait GameStore: Send + Sync {
    /// Report whether the backing store is reachable
    async fn health_check(&self) -> StoreResult<bool>;

    /// First word flagged valid, or `None` when there is none
    async fn first_valid_word(&self) -> StoreResult<Option<Word>>;

    /// Insert words as valid, ignoring duplicates. Returns how many were new.
    async fn seed_words(&self, words: &[String]) -> StoreResult<u64>;

    /// Delete a word
    ///
    /// * `Err(StoreError::Conflict)` while a session references it
    /// * `Err(StoreError::NotFound)` if no such word exists
    async fn delete_word(&self, word_id: i32) -> StoreResult<()>;

    /// Persist a new session targeting `target_word_id`, with a fresh token
    async fn create_session(&self, target_word_id: i32) -> StoreResult<GameSession>;

    /// Look up a session by public token together with its guesses in insertion order
    async fn find_session(
        &self,
        session_token: &str,
    ) -> StoreResult<Option<(GameSession, Vec<GameGuess>)>>;

    /// Append a guess; the guess number is the session's new guess count
    async fn record_guess(&self, session_id: Uuid, guess: NewGuess) -> StoreResult<GameGuess>;

    /// Delete a session and, by cascade, its guesses. `false` if nothing matched.
    async fn delete_session(&self, session_token: &str) -> StoreResult<bool>;
}

/// Postgres-backed store
#[derive(Clone)]
pub struct PgGameStore {
    pool: PgPool,
}

impl PgGameStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameStore for PgGameStore {
    async fn health_check(&self) -> StoreResult<bool> {
        match queries::ping(&self.pool).await {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::warn!("Database health check failed: {}", e);
                Ok(false)
            }
        }
    }

    async fn first_valid_word(&self) -> StoreResult<Option<Word>> {
        Ok(queries::get_first_valid_word(&self.pool).await?)
    }

    async fn seed_words(&self, words: &[String]) -> StoreResult<u64> {
        Ok(queries::insert_words(&self.pool, words).await?)
    }

    async fn delete_word(&self, word_id: i32) -> StoreResult<()> {
        let deleted = queries::delete_word(&self.pool, word_id)
            .await
            .map_err(StoreError::from_sqlx)?;

        if deleted == 0 {
            return Err(StoreError::NotFound(format!("word {}", word_id)));
        }
        Ok(())
    }

    async fn create_session(&self, target_word_id: i32) -> StoreResult<GameSession> {
        queries::create_game_session(&self.pool, target_word_id)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn find_session(
        &self,
        session_token: &str,
    ) -> StoreResult<Option<(GameSession, Vec<GameGuess>)>> {
        let Some(session) = queries::get_game_session_by_token(&self.pool, session_token).await?
        else {
            return Ok(None);
        };

        let guesses = queries::get_session_guesses(&self.pool, session.id).await?;
        Ok(Some((session, guesses)))
    }

    async fn record_guess(&self, session_id: Uuid, guess: NewGuess) -> StoreResult<GameGuess> {
        queries::insert_guess(&self.pool, session_id, &guess)
            .await
            .map_err(StoreError::from_sqlx)?
            .ok_or_else(|| StoreError::NotFound(format!("session {}", session_id)))
    }

    async fn delete_session(&self, session_token: &str) -> StoreResult<bool> {
        let deleted = queries::delete_game_session(&self.pool, session_token).await?;
        Ok(deleted > 0)
    }
}
