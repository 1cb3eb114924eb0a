use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Something before an `@`, without line terminators, and a domain free of
/// ASCII whitespace after it.
static MAIL_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\n\r\x{85}\x{2028}\x{2029}]+@[^ \t\n\x0B\x0C\r]+$")
        .expect("mail address pattern compiles")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailAddressError {
    #[error("mail address is missing")]
    Missing,

    #[error("invalid mail address '{0}'")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MailAddress(String);

impl MailAddress {
    pub fn new(mail_address: Option<&str>) -> Result<Self, MailAddressError> {
        let mail_address = mail_address
            .ok_or(MailAddressError::Missing)?
            .replace(' ', "");

        if !Self::is_well_formed(&mail_address) {
            return Err(MailAddressError::Invalid(mail_address));
        }
        Ok(Self(mail_address))
    }

    fn is_well_formed(mail_address: &str) -> bool {
        MAIL_ADDRESS.is_match(mail_address)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MailAddress {
    type Error = MailAddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(Some(&value))
    }
}

impl From<MailAddress> for String {
    fn from(mail_address: MailAddress) -> Self {
        mail_address.0
    }
}
