use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::MessageResponse;

/// Errors raised by the persistence gateway
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A relational constraint rejected the operation (e.g. deleting a word
    /// that a session still references)
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// Map restrict/unique violations to `Conflict`, everything else stays a database error
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() || db_err.is_unique_violation() {
                return StoreError::Conflict(db_err.message().to_string());
            }
        }
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by HTTP handlers
///
/// Detail is never sent to the client; handlers log it before converting.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Game session not found")]
    SessionNotFound,

    #[error("{0}")]
    Internal(&'static str),
}

pub const START_GAME_FAILED: &str = "An error occurred while starting the game";
pub const GET_SESSION_FAILED: &str = "An error occurred while retrieving the game session";
pub const END_SESSION_FAILED: &str = "An error occurred while ending the game session";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::SessionNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
