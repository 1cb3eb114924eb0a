//! Opaque identifiers for accounts and positions

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("invalid identity '{0}', expected a lowercase hyphenated UUID")]
    Format(String),

    #[error("invalid identity '{identity}', expected UUID version 4, got {version}")]
    Version { identity: String, version: usize },
}

/// A random (version 4) UUID, printed lowercase and hyphenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(Uuid);

impl Identity {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(identity: &str) -> Result<Self, IdentityError> {
        let trimmed = identity.replace(' ', "");
        if !Self::is_canonical(&trimmed) {
            return Err(IdentityError::Format(identity.to_string()));
        }

        let uuid = Uuid::parse_str(&trimmed)
            .map_err(|_| IdentityError::Format(identity.to_string()))?;
        if uuid.get_version_num() != 4 {
            return Err(IdentityError::Version {
                identity: identity.to_string(),
                version: uuid.get_version_num(),
            });
        }
        Ok(Self(uuid))
    }

    /// `8-4-4-4-12` lowercase hex digits.
    fn is_canonical(identity: &str) -> bool {
        identity.len() == 36
            && identity.char_indices().all(|(i, c)| match i {
                8 | 13 | 18 | 23 => c == '-',
                _ => matches!(c, '0'..='9' | 'a'..='f'),
            })
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl TryFrom<String> for Identity {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> Self {
        identity.to_string()
    }
}

/// Source of fresh identities for newly registered accounts and positions.
pub trait IdentityGenerator {
    fn generate(&self) -> Identity;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Generator;

impl IdentityGenerator for UuidV4Generator {
    fn generate(&self) -> Identity {
        Identity::new_v4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_identities_are_v4() {
        let identity = UuidV4Generator.generate();
        let printed = identity.to_string();
        assert_eq!(printed.len(), 36);
        assert_eq!(&printed[14..15], "4");
        assert_eq!(Identity::parse(&printed), Ok(identity));
        assert_ne!(identity, UuidV4Generator.generate());
    }

    #[test]
    fn test_parse_strips_spaces() {
        let identity = Identity::parse(" 3f1e6f2a-9c1b-4d7e-8a2b-0c4d5e6f7a8b ").unwrap();
        assert_eq!(identity.to_string(), "3f1e6f2a-9c1b-4d7e-8a2b-0c4d5e6f7a8b");
    }

    #[test]
    fn test_parse_rejects_bad_format() {
        for raw in [
            "",
            "not a uuid",
            "3F1E6F2A-9C1B-4D7E-8A2B-0C4D5E6F7A8B",
            "3f1e6f2a9c1b4d7e8a2b0c4d5e6f7a8b",
            "3f1e6f2a-9c1b-4d7e-8a2b-0c4d5e6f7a8",
        ] {
            assert!(matches!(Identity::parse(raw), Err(IdentityError::Format(_))), "{raw}");
        }
    }

    #[test]
    fn test_parse_rejects_other_versions() {
        assert!(matches!(
            Identity::parse("3f1e6f2a-9c1b-1d7e-8a2b-0c4d5e6f7a8b"),
            Err(IdentityError::Version { version: 1, .. })
        ));
    }
}
