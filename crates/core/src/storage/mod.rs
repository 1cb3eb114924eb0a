//! SQLite storage for accounts, positions and authentication tokens

mod db;
mod models;

pub use db::Database;
pub use models::*;
