//! Chess Repertoire Core Library

pub mod account;
pub mod error;
pub mod fen;
pub mod identity;
pub mod ports;
pub mod position;
pub mod storage;
pub mod use_cases;

pub use error::{Error, Result};
pub use fen::{Fen, FenError};
pub use identity::{Identity, IdentityGenerator, UuidV4Generator};
pub use storage::Database;
