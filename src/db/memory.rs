//! In-memory [`GameStore`] used by unit tests.
//!
//! Mirrors the Postgres schema rules: unique word text, restrict on deleting
//! a targeted word, cascade from sessions to guesses.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use uuid::Uuid;

use super::GameStore;
use crate::error::{StoreError, StoreResult};
use crate::models::{GameGuess, GameSession, NewGuess, Word};

#[derive(Clone, Default)]
pub struct MemoryGameStore {
    data: Arc<RwLock<MemoryData>>,
}

#[derive(Default)]
struct MemoryData {
    words: Vec<Word>,
    sessions: Vec<GameSession>,
    guesses: Vec<GameGuess>,
    next_word_id: i32,
    next_guess_id: i32,
    unavailable: bool,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with valid words
    pub fn with_words(words: &[&str]) -> Self {
        let store = Self::new();
        {
            let mut data = store.lock();
            for text in words {
                data.push_word(text, true);
            }
        }
        store
    }

    /// Add a word flagged invalid
    pub fn add_invalid_word(&self, text: &str) -> i32 {
        self.lock().push_word(text, false)
    }

    /// Make every subsequent call fail as if the database were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    pub fn guess_count_total(&self) -> usize {
        self.lock().guesses.len()
    }

    fn lock(&self) -> RwLockWriteGuard<'_, MemoryData> {
        self.data.write().unwrap_or_else(|e| e.into_inner())
    }

    fn available(&self) -> StoreResult<RwLockWriteGuard<'_, MemoryData>> {
        let data = self.lock();
        if data.unavailable {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(data)
    }
}

impl MemoryData {
    fn push_word(&mut self, text: &str, is_valid: bool) -> i32 {
        self.next_word_id += 1;
        let id = self.next_word_id;
        self.words.push(Word {
            id,
            word_text: text.to_uppercase(),
            is_valid,
            difficulty: 1,
            created_at: Utc::now(),
        });
        id
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn health_check(&self) -> StoreResult<bool> {
        Ok(!self.lock().unavailable)
    }

    async fn first_valid_word(&self) -> StoreResult<Option<Word>> {
        let data = self.available()?;
        Ok(data.words.iter().find(|w| w.is_valid).cloned())
    }

    async fn seed_words(&self, words: &[String]) -> StoreResult<u64> {
        let mut data = self.available()?;
        let mut inserted = 0;
        for text in words {
            let upper = text.to_uppercase();
            if data.words.iter().any(|w| w.word_text == upper) {
                continue;
            }
            data.push_word(&upper, true);
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn delete_word(&self, word_id: i32) -> StoreResult<()> {
        let mut data = self.available()?;
        if data.sessions.iter().any(|s| s.target_word_id == word_id) {
            return Err(StoreError::Conflict(format!(
                "word {} is referenced by a game session",
                word_id
            )));
        }

        let before = data.words.len();
        data.words.retain(|w| w.id != word_id);
        if data.words.len() == before {
            return Err(StoreError::NotFound(format!("word {}", word_id)));
        }
        Ok(())
    }

    async fn create_session(&self, target_word_id: i32) -> StoreResult<GameSession> {
        let mut data = self.available()?;
        if !data.words.iter().any(|w| w.id == target_word_id) {
            return Err(StoreError::Conflict(format!(
                "word {} does not exist",
                target_word_id
            )));
        }

        let session = GameSession {
            id: Uuid::new_v4(),
            session_id: Uuid::new_v4().to_string(),
            target_word_id,
            start_time: Utc::now(),
            end_time: None,
            is_completed: false,
            is_won: false,
            guess_count: 0,
        };
        data.sessions.push(session.clone());
        Ok(session)
    }

    async fn find_session(
        &self,
        session_token: &str,
    ) -> StoreResult<Option<(GameSession, Vec<GameGuess>)>> {
        let data = self.available()?;
        let Some(session) = data
            .sessions
            .iter()
            .find(|s| s.session_id == session_token)
            .cloned()
        else {
            return Ok(None);
        };

        let mut guesses: Vec<GameGuess> = data
            .guesses
            .iter()
            .filter(|g| g.session_id == session.id)
            .cloned()
            .collect();
        guesses.sort_by_key(|g| (g.guess_number, g.id));

        Ok(Some((session, guesses)))
    }

    async fn record_guess(&self, session_id: Uuid, guess: NewGuess) -> StoreResult<GameGuess> {
        let mut data = self.available()?;
        let session = data
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| StoreError::NotFound(format!("session {}", session_id)))?;
        session.guess_count += 1;
        let guess_number = session.guess_count;

        data.next_guess_id += 1;
        let row = GameGuess {
            id: data.next_guess_id,
            session_id,
            guess_number,
            guess_word: guess.guess_word,
            result: guess.result,
            is_correct: guess.is_correct,
            timestamp: Utc::now(),
        };
        data.guesses.push(row.clone());
        Ok(row)
    }

    async fn delete_session(&self, session_token: &str) -> StoreResult<bool> {
        let mut data = self.available()?;
        let removed: Vec<Uuid> = data
            .sessions
            .iter()
            .filter(|s| s.session_id == session_token)
            .map(|s| s.id)
            .collect();
        if removed.is_empty() {
            return Ok(false);
        }

        data.sessions.retain(|s| !removed.contains(&s.id));
        data.guesses.retain(|g| !removed.contains(&g.session_id));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn guess(word: &str) -> NewGuess {
        NewGuess {
            guess_word: word.to_string(),
            result: String::new(),
            is_correct: false,
        }
    }

    #[tokio::test]
    async fn test_first_valid_word_skips_invalid() {
        let store = MemoryGameStore::new();
        store.add_invalid_word("CRANE");
        store
            .seed_words(&["APPLE".to_string()])
            .await
            .unwrap();

        let word = store.first_valid_word().await.unwrap().unwrap();
        assert_eq!(word.word_text, "APPLE");
        assert!(word.is_valid);
    }

    #[tokio::test]
    async fn test_first_valid_word_none_when_empty() {
        let store = MemoryGameStore::new();
        store.add_invalid_word("CRANE");
        assert!(store.first_valid_word().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seed_words_ignores_duplicates() {
        let store = MemoryGameStore::with_words(&["APPLE"]);
        let inserted = store
            .seed_words(&["apple".to_string(), "GRAPE".to_string()])
            .await
            .unwrap();
        assert_eq!(inserted, 1);
    }

    #[tokio::test]
    async fn test_record_guess_numbers_in_order() {
        let store = MemoryGameStore::with_words(&["APPLE"]);
        let session = store.create_session(1).await.unwrap();

        let first = store.record_guess(session.id, guess("CRANE")).await.unwrap();
        let second = store.record_guess(session.id, guess("APPLE")).await.unwrap();
        assert_eq!(first.guess_number, 1);
        assert_eq!(second.guess_number, 2);

        let (session, guesses) = store
            .find_session(&session.session_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(session.guess_count, 2);
        let words: Vec<_> = guesses.iter().map(|g| g.guess_word.as_str()).collect();
        assert_eq!(words, vec!["CRANE", "APPLE"]);
    }

    #[tokio::test]
    async fn test_record_guess_unknown_session() {
        let store = MemoryGameStore::new();
        let result = store.record_guess(Uuid::new_v4(), guess("CRANE")).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_session_cascades_to_guesses() {
        let store = MemoryGameStore::with_words(&["APPLE"]);
        let session = store.create_session(1).await.unwrap();
        store.record_guess(session.id, guess("CRANE")).await.unwrap();
        store.record_guess(session.id, guess("SLATE")).await.unwrap();
        assert_eq!(store.guess_count_total(), 2);

        assert!(store.delete_session(&session.session_id).await.unwrap());
        assert_eq!(store.guess_count_total(), 0);
        assert!(store
            .find_session(&session.session_id)
            .await
            .unwrap()
            .is_none());
        assert!(!store.delete_session(&session.session_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_referenced_word_is_rejected() {
        let store = MemoryGameStore::with_words(&["APPLE"]);
        let session = store.create_session(1).await.unwrap();

        let result = store.delete_word(session.target_word_id).await;
        assert!(matches!(result, Err(StoreError::Conflict(_))));

        // Once the session is gone the word can be removed
        store.delete_session(&session.session_id).await.unwrap();
        assert_ok!(store.delete_word(session.target_word_id).await);
        assert_err!(store.delete_word(session.target_word_id).await);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_and_reports_unhealthy() {
        let store = MemoryGameStore::with_words(&["APPLE"]);
        store.set_unavailable(true);

        assert!(!store.health_check().await.unwrap());
        assert_err!(store.first_valid_word().await);
        assert_err!(store.find_session("missing").await);
    }
}
