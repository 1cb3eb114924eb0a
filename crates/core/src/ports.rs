//! Collaborators the use cases depend on
//!
//! [`crate::storage::Database`] implements every trait here; tests swap in
//! in-memory doubles.

use crate::account::{HashedPassword, MailAddress, Nickname, PlainPassword};
use crate::error::Result;
use crate::fen::Fen;
use crate::identity::Identity;
use crate::position::PositionName;
use crate::storage::{Account, StoredPosition};

#[derive(Debug, Clone)]
pub struct RegisterAccountCommand {
    pub identity: Identity,
    pub nickname: Nickname,
    pub mail_address: MailAddress,
    pub hashed_password: HashedPassword,
}

#[derive(Debug, Clone)]
pub struct RegisterPositionCommand {
    pub identity: Identity,
    pub owner: Identity,
    pub name: PositionName,
    pub fen: Fen,
}

/// The account behind an authentication token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub identity: Identity,
}

pub trait AccountQueries {
    fn find_by_nickname(&self, nickname: &Nickname) -> Result<Option<Account>>;
    fn find_by_mail_address(&self, mail_address: &MailAddress) -> Result<Option<Account>>;
}

pub trait AccountCommands {
    fn register_account(&self, command: &RegisterAccountCommand) -> Result<()>;
}

pub trait PositionQueries {
    fn find_by_owner_and_name(
        &self,
        owner: &Identity,
        name: &PositionName,
    ) -> Result<Option<StoredPosition>>;

    /// Looks the canonical FEN up, so spacing differences don't hide duplicates.
    fn find_by_owner_and_fen(&self, owner: &Identity, fen: &Fen) -> Result<Option<StoredPosition>>;

    fn find_by_owner(&self, owner: &Identity) -> Result<Vec<StoredPosition>>;
}

pub trait PositionCommands {
    fn register_position(&self, command: &RegisterPositionCommand) -> Result<()>;
}

pub trait PasswordHasher {
    fn hash(&self, password: &PlainPassword) -> Result<HashedPassword>;
    fn verify(&self, password: &PlainPassword, hashed: &HashedPassword) -> bool;
}

pub trait Authenticator {
    /// `Ok(None)` when the token is unknown.
    fn authenticate(&self, token: &str) -> Result<Option<User>>;
}

pub trait TokenIssuer {
    fn issue_token(&self, owner: &Identity) -> Result<String>;
}
