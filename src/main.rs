mod config;
mod db;
mod error;
mod game;
mod models;
mod routes;
mod words;

use std::{path::Path, sync::Arc};

use anyhow::Result;
use axum::Router;
use config::Config;
use db::{GameStore, PgGameStore};
use game::GameService;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use words::WordList;

/// Application state shared across all handlers
pub struct AppState {
    pub game: GameService,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anagramme_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Anagramme backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Connect to database
    let db = db::create_pool(config.database_url(), config.database.max_connections).await?;
    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations").run(&db).await?;
    tracing::info!("Database migrations completed");

    let store: Arc<dyn GameStore> = Arc::new(PgGameStore::new(db));

    // Seed target words
    seed_words(store.as_ref(), &config.game.words_path, config.game.word_length).await?;

    // Create application state
    let state = Arc::new(AppState {
        game: GameService::new(store, &config.game),
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Start a game: POST http://{}/api/game/start", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Load the word list, if present, and insert any words the store lacks
async fn seed_words(store: &dyn GameStore, path: &str, word_length: usize) -> Result<()> {
    if !Path::new(path).exists() {
        tracing::warn!(
            "Word list {} not found; games can only start once words are seeded",
            path
        );
        return Ok(());
    }

    let list = WordList::load(path, word_length).await?;
    if list.is_empty() {
        tracing::warn!(
            "Word list {} has no {}-letter words; nothing to seed",
            path,
            word_length
        );
        return Ok(());
    }

    let inserted = store.seed_words(list.words()).await?;
    tracing::info!("Seeded {} new words from {}", inserted, path);

    Ok(())
}
