use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Longest word the schema can hold (`VARCHAR(5)` word columns)
pub const MAX_WORD_LENGTH: usize = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub words_path: String,
    pub max_guesses: u32,
    pub word_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words_path: "./words.txt".to_string(),
            max_guesses: 6,
            word_length: 5,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=MAX_WORD_LENGTH).contains(&self.word_length),
            "WORD_LENGTH must be between 1 and {}, got {}",
            MAX_WORD_LENGTH,
            self.word_length
        );
        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database = DatabaseConfig {
            url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a number")?,
        };

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
        };

        let defaults = GameConfig::default();
        let game = GameConfig {
            words_path: env::var("WORDS_PATH")
                .unwrap_or(defaults.words_path),
            max_guesses: env::var("MAX_GUESSES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_guesses),
            word_length: env::var("WORD_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.word_length),
        };
        game.validate()?;

        Ok(Config {
            database,
            server,
            game,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
