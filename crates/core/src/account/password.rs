//! Plain and hashed passwords, and the Argon2 hasher turning one into the other

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;
use std::fmt;
use thiserror::Error;

use crate::error::{Error, Result};
use crate::ports::PasswordHasher;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password is missing")]
    Missing,

    #[error("password must be at least {minimum} characters long")]
    TooShort { minimum: usize },

    #[error("password mustn't be longer than {maximum} characters")]
    TooLong { maximum: usize },

    #[error("password must contain a lowercase letter")]
    WithoutLowercase,

    #[error("password must contain an uppercase letter")]
    WithoutUppercase,

    #[error("password must contain a digit")]
    WithoutDigits,

    #[error("password must contain a symbol")]
    WithoutSymbols,
}

// OWASP password special characters
const SYMBOLS: &str = "!~<>,;:_=?*+#.\"&§%°()|[]-$^@/";

/// A password as typed by its owner, checked against the strength policy.
#[derive(Clone, PartialEq, Eq)]
pub struct PlainPassword(String);

impl PlainPassword {
    pub const MINIMUM_LENGTH: usize = 8;
    pub const MAXIMUM_LENGTH: usize = 64;

    pub fn new(password: Option<&str>) -> std::result::Result<Self, PasswordError> {
        let password = password.ok_or(PasswordError::Missing)?;

        let length = password.chars().count();
        if length < Self::MINIMUM_LENGTH {
            return Err(PasswordError::TooShort {
                minimum: Self::MINIMUM_LENGTH,
            });
        }
        if length > Self::MAXIMUM_LENGTH {
            return Err(PasswordError::TooLong {
                maximum: Self::MAXIMUM_LENGTH,
            });
        }

        let contains = |class: fn(&char) -> bool| password.chars().any(|c| class(&c));
        if !contains(char::is_ascii_lowercase) {
            return Err(PasswordError::WithoutLowercase);
        }
        if !contains(char::is_ascii_uppercase) {
            return Err(PasswordError::WithoutUppercase);
        }
        if !contains(char::is_ascii_digit) {
            return Err(PasswordError::WithoutDigits);
        }
        if !password.chars().any(|c| SYMBOLS.contains(c)) {
            return Err(PasswordError::WithoutSymbols);
        }

        Ok(Self(password.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainPassword(***)")
    }
}

/// Output of a [`PasswordHasher`], stored as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Argon2id with a fresh random salt per hash; the salt and parameters travel
/// inside the PHC string.
#[derive(Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &PlainPassword) -> Result<HashedPassword> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(|e| Error::PasswordHashing(e.to_string()))?;
        Ok(HashedPassword::new(hash.to_string()))
    }

    fn verify(&self, password: &PlainPassword, hashed: &HashedPassword) -> bool {
        PasswordHash::new(hashed.as_str())
            .map(|parsed| {
                self.argon2
                    .verify_password(password.expose().as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}
