//! Error types for chess-repertoire-core

use thiserror::Error;

use crate::identity::IdentityError;

/// Failures of the infrastructure behind the use cases. Validation problems
/// are never reported here: they end up as flags in the use case responses.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Stored identity is corrupted: {0}")]
    Identity(#[from] IdentityError),

    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),
}

pub type Result<T> = std::result::Result<T, Error>;
