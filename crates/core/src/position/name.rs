use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionNameError {
    #[error("position name is missing")]
    Missing,

    #[error("position name mustn't be longer than {maximum} characters, got {length}")]
    TooLong { length: usize, maximum: usize },
}

/// Label a user gives to one of their saved positions, with whitespace runs
/// collapsed and both ends trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PositionName(String);

impl PositionName {
    pub const MAXIMUM_LENGTH: usize = 32;

    pub fn new(name: Option<&str>) -> Result<Self, PositionNameError> {
        let name = name
            .ok_or(PositionNameError::Missing)?
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if name.is_empty() {
            return Err(PositionNameError::Missing);
        }

        let length = name.chars().count();
        if length > Self::MAXIMUM_LENGTH {
            return Err(PositionNameError::TooLong {
                length,
                maximum: Self::MAXIMUM_LENGTH,
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PositionName {
    type Error = PositionNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(Some(&value))
    }
}

impl From<PositionName> for String {
    fn from(name: PositionName) -> Self {
        name.0
    }
}
