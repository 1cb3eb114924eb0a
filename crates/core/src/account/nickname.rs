use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NicknameError {
    #[error("nickname is missing")]
    Missing,

    #[error("nickname '{nickname}' must be at least {minimum} characters long")]
    TooShort { nickname: String, minimum: usize },

    #[error("nickname '{nickname}' mustn't be longer than {maximum} characters")]
    TooLong { nickname: String, maximum: usize },

    #[error("nickname '{0}' can only contain alphanumerics, '-', '_' and '.', and must start with an alphanumeric")]
    Invalid(String),
}

/// Public account name. Whitespace is dropped entirely, so `"b  az"` is `"baz"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nickname(String);

impl Nickname {
    pub const MINIMUM_LENGTH: usize = 2;
    pub const MAXIMUM_LENGTH: usize = 16;

    pub fn new(nickname: Option<&str>) -> Result<Self, NicknameError> {
        let nickname: String = nickname
            .ok_or(NicknameError::Missing)?
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let length = nickname.chars().count();
        if length < Self::MINIMUM_LENGTH {
            return Err(NicknameError::TooShort {
                nickname,
                minimum: Self::MINIMUM_LENGTH,
            });
        }
        if length > Self::MAXIMUM_LENGTH {
            return Err(NicknameError::TooLong {
                nickname,
                maximum: Self::MAXIMUM_LENGTH,
            });
        }

        let starts_alphanumeric = nickname.starts_with(|c: char| c.is_ascii_alphanumeric());
        let allowed = nickname
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !starts_alphanumeric || !allowed {
            return Err(NicknameError::Invalid(nickname));
        }

        Ok(Self(nickname))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Nickname {
    type Error = NicknameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(Some(&value))
    }
}

impl From<Nickname> for String {
    fn from(nickname: Nickname) -> Self {
        nickname.0
    }
}
