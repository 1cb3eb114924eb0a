//! Configuration for the chess-repertoire server
//!
//! Every setting has a development default and can be overridden from the
//! environment:
//! 1. CHESS_REPERTOIRE_DB: SQLite file, `chess_repertoire.db` by default
//! 2. CHESS_REPERTOIRE_ADDR: listening address, `127.0.0.1:3000` by default

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

const DATABASE_VAR: &str = "CHESS_REPERTOIRE_DB";
const ADDRESS_VAR: &str = "CHESS_REPERTOIRE_ADDR";

const DEFAULT_DATABASE: &str = "chess_repertoire.db";
const DEFAULT_ADDRESS: &str = "127.0.0.1:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("CHESS_REPERTOIRE_ADDR must be a socket address like 127.0.0.1:3000, got '{0}'")]
    Address(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
    pub address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(DATABASE_VAR).ok(),
            std::env::var(ADDRESS_VAR).ok(),
        )
    }

    fn from_values(database: Option<String>, address: Option<String>) -> Result<Self, ConfigError> {
        let database_path = database
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));

        let address = address.unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        let address = address
            .trim()
            .parse()
            .map_err(|_| ConfigError::Address(address.clone()))?;

        Ok(Self {
            database_path,
            address,
        })
    }
}
