use anyhow::Context;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chess_repertoire_core::account::Argon2Hasher;
use chess_repertoire_core::{Database, UuidV4Generator};

mod config;
mod error;
mod routes;

use config::Config;
use error::AppError;

pub struct AppState {
    pub db: Mutex<Database>,
    pub hasher: Argon2Hasher,
    pub identities: UuidV4Generator,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db: Mutex::new(db),
            hasher: Argon2Hasher::new(),
            identities: UuidV4Generator,
        }
    }

    pub fn db(&self) -> Result<MutexGuard<'_, Database>, AppError> {
        self.db.lock().map_err(|_| AppError::LockPoisoned)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Invalid configuration")?;

    let db = Database::open(&config.database_path).with_context(|| {
        format!("Failed to open database {}", config.database_path.display())
    })?;

    let app = routes::router(Arc::new(AppState::new(db)));

    let listener = tokio::net::TcpListener::bind(config.address)
        .await
        .with_context(|| format!("Failed to bind {}", config.address))?;

    info!(address = %config.address, database = %config.database_path.display(), "server running");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
