//! Exchanging credentials for an authentication token

use serde::Deserialize;
use tracing::{debug, info};

use crate::account::{Nickname, PlainPassword};
use crate::error::Result;
use crate::ports::{AccountQueries, PasswordHasher, TokenIssuer};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub nickname: Option<String>,
    pub password: Option<String>,
}

pub struct LoginInteractor<'a> {
    accounts: &'a dyn AccountQueries,
    hasher: &'a dyn PasswordHasher,
    tokens: &'a dyn TokenIssuer,
}

impl<'a> LoginInteractor<'a> {
    pub fn new(
        accounts: &'a dyn AccountQueries,
        hasher: &'a dyn PasswordHasher,
        tokens: &'a dyn TokenIssuer,
    ) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
        }
    }

    /// A fresh token, or `None` when the credentials don't match an account.
    /// Callers can't tell an unknown nickname from a wrong password.
    pub fn execute(&self, request: &LoginRequest) -> Result<Option<String>> {
        let (Ok(nickname), Ok(password)) = (
            Nickname::new(request.nickname.as_deref()),
            PlainPassword::new(request.password.as_deref()),
        ) else {
            debug!("login rejected: malformed credentials");
            return Ok(None);
        };

        let Some(account) = self.accounts.find_by_nickname(&nickname)? else {
            debug!(%nickname, "login rejected: unknown nickname");
            return Ok(None);
        };

        if !self.hasher.verify(&password, &account.hashed_password()) {
            debug!(%nickname, "login rejected: wrong password");
            return Ok(None);
        }

        let token = self.tokens.issue_token(&account.identity)?;
        info!(identity = %account.identity, "user logged in");
        Ok(Some(token))
    }
}
