//! In-memory stand-ins for the ports, shared by the interactor tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::account::{HashedPassword, MailAddress, Nickname, PlainPassword};
use crate::error::Result;
use crate::fen::Fen;
use crate::identity::{Identity, IdentityGenerator};
use crate::ports::*;
use crate::position::PositionName;
use crate::storage::{Account, StoredPosition};

pub const OWNER: &str = "3f0bdfa6-1b1c-4c1e-9b7a-5d2c8e4f6a01";
pub const GENERATED: &str = "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d";

pub fn identity(raw: &str) -> Identity {
    Identity::parse(raw).unwrap()
}

#[derive(Default)]
pub struct InMemoryStore {
    pub accounts: RefCell<Vec<Account>>,
    pub positions: RefCell<Vec<StoredPosition>>,
    pub tokens: RefCell<HashMap<String, Identity>>,
    issued: Cell<u32>,
}

impl InMemoryStore {
    pub fn with_account(nickname: &str, mail_address: &str, hashed_password: &str) -> Self {
        let store = Self::default();
        store.accounts.borrow_mut().push(Account {
            identity: identity(OWNER),
            nickname: nickname.to_string(),
            mail_address: mail_address.to_string(),
            hashed_password: hashed_password.to_string(),
            created_at: 0,
        });
        store
    }

    pub fn with_token(self, token: &str, owner: Identity) -> Self {
        self.tokens.borrow_mut().insert(token.to_string(), owner);
        self
    }

    pub fn with_position(self, owner: Identity, name: &str, fen: &str) -> Self {
        self.positions.borrow_mut().push(StoredPosition {
            identity: Identity::new_v4(),
            owner,
            name: name.to_string(),
            fen: fen.to_string(),
            created_at: 0,
        });
        self
    }
}

impl AccountQueries for InMemoryStore {
    fn find_by_nickname(&self, nickname: &Nickname) -> Result<Option<Account>> {
        Ok(self
            .accounts
            .borrow()
            .iter()
            .find(|account| account.nickname == nickname.as_str())
            .cloned())
    }

    fn find_by_mail_address(&self, mail_address: &MailAddress) -> Result<Option<Account>> {
        Ok(self
            .accounts
            .borrow()
            .iter()
            .find(|account| account.mail_address == mail_address.as_str())
            .cloned())
    }
}

impl AccountCommands for InMemoryStore {
    fn register_account(&self, command: &RegisterAccountCommand) -> Result<()> {
        self.accounts.borrow_mut().push(Account {
            identity: command.identity,
            nickname: command.nickname.to_string(),
            mail_address: command.mail_address.to_string(),
            hashed_password: command.hashed_password.as_str().to_string(),
            created_at: 0,
        });
        Ok(())
    }
}

impl PositionQueries for InMemoryStore {
    fn find_by_owner_and_name(
        &self,
        owner: &Identity,
        name: &PositionName,
    ) -> Result<Option<StoredPosition>> {
        Ok(self
            .positions
            .borrow()
            .iter()
            .find(|position| position.owner == *owner && position.name == name.as_str())
            .cloned())
    }

    fn find_by_owner_and_fen(&self, owner: &Identity, fen: &Fen) -> Result<Option<StoredPosition>> {
        Ok(self
            .positions
            .borrow()
            .iter()
            .find(|position| position.owner == *owner && position.fen == fen.as_str())
            .cloned())
    }

    fn find_by_owner(&self, owner: &Identity) -> Result<Vec<StoredPosition>> {
        Ok(self
            .positions
            .borrow()
            .iter()
            .filter(|position| position.owner == *owner)
            .cloned()
            .collect())
    }
}

impl PositionCommands for InMemoryStore {
    fn register_position(&self, command: &RegisterPositionCommand) -> Result<()> {
        self.positions.borrow_mut().push(StoredPosition {
            identity: command.identity,
            owner: command.owner,
            name: command.name.to_string(),
            fen: command.fen.to_string(),
            created_at: 0,
        });
        Ok(())
    }
}

impl Authenticator for InMemoryStore {
    fn authenticate(&self, token: &str) -> Result<Option<User>> {
        Ok(self
            .tokens
            .borrow()
            .get(token)
            .map(|&identity| User { identity }))
    }
}

impl TokenIssuer for InMemoryStore {
    fn issue_token(&self, owner: &Identity) -> Result<String> {
        let count = self.issued.get() + 1;
        self.issued.set(count);
        let token = format!("token-{count}");
        self.tokens.borrow_mut().insert(token.clone(), *owner);
        Ok(token)
    }
}

/// Stores `hashed:<password>`, readable in assertions.
pub struct PrefixHasher;

impl PasswordHasher for PrefixHasher {
    fn hash(&self, password: &PlainPassword) -> Result<HashedPassword> {
        Ok(HashedPassword::new(format!("hashed:{}", password.expose())))
    }

    fn verify(&self, password: &PlainPassword, hashed: &HashedPassword) -> bool {
        hashed.as_str() == format!("hashed:{}", password.expose())
    }
}

pub struct FixedIdentity(pub Identity);

impl IdentityGenerator for FixedIdentity {
    fn generate(&self) -> Identity {
        self.0
    }
}
