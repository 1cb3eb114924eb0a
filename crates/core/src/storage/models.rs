//! Database models

use serde::Serialize;

use crate::account::HashedPassword;
use crate::identity::Identity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub identity: Identity,
    pub nickname: String,
    pub mail_address: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub created_at: u64,
}

impl Account {
    pub fn hashed_password(&self) -> HashedPassword {
        HashedPassword::new(self.hashed_password.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredPosition {
    pub identity: Identity,
    pub owner: Identity,
    pub name: String,
    pub fen: String,
    pub created_at: u64,
}
