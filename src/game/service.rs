use std::sync::Arc;

use crate::{
    config::GameConfig,
    db::GameStore,
    error::StoreResult,
    models::{GameSessionResponse, StartGameResponse},
};

/// Starts and looks up game sessions
///
/// Stateless apart from the store handle; every call goes straight to the store.
#[derive(Clone)]
pub struct GameService {
    store: Arc<dyn GameStore>,
    max_guesses: u32,
    word_length: usize,
}

impl GameService {
    pub fn new(store: Arc<dyn GameStore>, config: &GameConfig) -> Self {
        Self {
            store,
            max_guesses: config.max_guesses,
            word_length: config.word_length,
        }
    }

    /// Start a new game against the first valid word
    ///
    /// With no valid word this is not an error: the response carries no
    /// session token and an explanatory message.
    pub async fn start_new_game(&self) -> StoreResult<StartGameResponse> {
        let Some(word) = self.store.first_valid_word().await? else {
            tracing::warn!("No valid words available to start a game");
            return Ok(StartGameResponse::no_valid_words(
                self.max_guesses,
                self.word_length,
            ));
        };

        let session = self.store.create_session(word.id).await?;
        tracing::debug!(
            "Created session {} targeting word {}",
            session.session_id,
            word.id
        );

        Ok(StartGameResponse::started(
            &session,
            self.max_guesses,
            self.word_length,
        ))
    }

    /// Fetch a session and its guesses by public token
    pub async fn get_game_session(
        &self,
        session_token: &str,
    ) -> StoreResult<Option<GameSessionResponse>> {
        let session = self.store.find_session(session_token).await?;
        Ok(session.map(|(session, guesses)| GameSessionResponse::new(session, guesses)))
    }

    /// Remove a session and its guesses. `false` if the token is unknown.
    pub async fn end_game_session(&self, session_token: &str) -> StoreResult<bool> {
        self.store.delete_session(session_token).await
    }

    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await.unwrap_or(false)
    }
}
