use sqlx::{PgPool, Result};
use uuid::Uuid;

use crate::models::{GameGuess, GameSession, NewGuess, Word};

// Word queries

/// First word flagged valid, by insertion order
pub async fn get_first_valid_word(pool: &PgPool) -> Result<Option<Word>> {
    sqlx::query_as::<_, Word>("SELECT * FROM words WHERE is_valid ORDER BY id LIMIT 1")
        .fetch_optional(pool)
        .await
}

/// Insert words as valid, skipping any whose text already exists
///
/// Returns the number of rows actually inserted.
pub async fn insert_words(pool: &PgPool, words: &[String]) -> Result<u64> {
    if words.is_empty() {
        return Ok(0);
    }

    let result = sqlx::query(
        r#"
        INSERT INTO words (word_text)
        SELECT * FROM UNNEST($1::VARCHAR[])
        ON CONFLICT (word_text) DO NOTHING
        "#,
    )
    .bind(words)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a word by id. Fails with a foreign key violation while any
/// session still targets it.
pub async fn delete_word(pool: &PgPool, word_id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM words WHERE id = $1")
        .bind(word_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

// =============================================================================
// Game Session Management
// =============================================================================

/// Create a new game session bound to `target_word_id`
///
/// Both the internal id and the public token are fresh v4 UUIDs. The start
/// time comes from the database so the returned row matches what later
/// lookups read back.
pub async fn create_game_session(pool: &PgPool, target_word_id: i32) -> Result<GameSession> {
    let id = Uuid::new_v4();
    let session_token = Uuid::new_v4().to_string();

    sqlx::query_as::<_, GameSession>(
        r#"
        INSERT INTO game_sessions (id, session_id, target_word_id)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&session_token)
    .bind(target_word_id)
    .fetch_one(pool)
    .await
}

pub async fn get_game_session_by_token(
    pool: &PgPool,
    session_token: &str,
) -> Result<Option<GameSession>> {
    sqlx::query_as::<_, GameSession>(
        "SELECT * FROM game_sessions WHERE session_id = $1 ORDER BY start_time LIMIT 1",
    )
    .bind(session_token)
    .fetch_optional(pool)
    .await
}

/// Guesses for a session in the order they were made
pub async fn get_session_guesses(pool: &PgPool, session_id: Uuid) -> Result<Vec<GameGuess>> {
    sqlx::query_as::<_, GameGuess>(
        "SELECT * FROM game_guesses WHERE session_id = $1 ORDER BY guess_number, id",
    )
    .bind(session_id)
    .fetch_all(pool)
    .await
}

/// Append a guess to a session
///
/// Bumps `guess_count` and uses the new count as the guess number, inside a
/// single transaction so concurrent guesses never share a number. Returns
/// `None` if the session does not exist.
pub async fn insert_guess(
    pool: &PgPool,
    session_id: Uuid,
    guess: &NewGuess,
) -> Result<Option<GameGuess>> {
    let mut tx = pool.begin().await?;

    let guess_number: Option<i32> = sqlx::query_scalar(
        r#"
        UPDATE game_sessions
        SET guess_count = guess_count + 1
        WHERE id = $1
        RETURNING guess_count
        "#,
    )
    .bind(session_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(guess_number) = guess_number else {
        tx.rollback().await?;
        return Ok(None);
    };

    let row = sqlx::query_as::<_, GameGuess>(
        r#"
        INSERT INTO game_guesses (session_id, guess_number, guess_word, result, is_correct)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(session_id)
    .bind(guess_number)
    .bind(&guess.guess_word)
    .bind(&guess.result)
    .bind(guess.is_correct)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Some(row))
}

/// Delete every session with this token; guesses go with them (ON DELETE CASCADE)
pub async fn delete_game_session(pool: &PgPool, session_token: &str) -> Result<u64> {
    let result = sqlx::query("DELETE FROM game_sessions WHERE session_id = $1")
        .bind(session_token)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn ping(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
