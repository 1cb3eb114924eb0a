//! Account registration

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::account::{
    MailAddress, MailAddressError, Nickname, NicknameError, PasswordError, PlainPassword,
};
use crate::error::Result;
use crate::identity::{Identity, IdentityGenerator};
use crate::ports::{AccountCommands, AccountQueries, PasswordHasher, RegisterAccountCommand};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRegistrationRequest {
    pub nickname: Option<String>,
    pub mail_address: Option<String>,
    pub password: Option<String>,
}

/// One flag per way a field can be rejected. At most one flag is raised per
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserRegistrationResponse {
    pub nickname_is_missing: bool,
    pub nickname_is_too_short: bool,
    pub nickname_is_too_long: bool,
    pub nickname_is_invalid: bool,
    pub nickname_is_already_taken: bool,

    pub mail_address_is_missing: bool,
    pub mail_address_is_invalid: bool,
    pub mail_address_is_already_taken: bool,

    pub password_is_missing: bool,
    pub password_is_too_short: bool,
    pub password_is_too_long: bool,
    pub password_is_too_weak: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_identity: Option<Identity>,
}

impl UserRegistrationResponse {
    pub fn is_success(&self) -> bool {
        self.account_identity.is_some()
    }
}

pub struct RegisterUserInteractor<'a> {
    accounts: &'a dyn AccountQueries,
    registry: &'a dyn AccountCommands,
    hasher: &'a dyn PasswordHasher,
    identities: &'a dyn IdentityGenerator,
}

impl<'a> RegisterUserInteractor<'a> {
    pub fn new(
        accounts: &'a dyn AccountQueries,
        registry: &'a dyn AccountCommands,
        hasher: &'a dyn PasswordHasher,
        identities: &'a dyn IdentityGenerator,
    ) -> Self {
        Self {
            accounts,
            registry,
            hasher,
            identities,
        }
    }

    /// Checks every field, then registers the account if none was rejected.
    pub fn execute(&self, request: &UserRegistrationRequest) -> Result<UserRegistrationResponse> {
        let mut response = UserRegistrationResponse::default();

        let nickname = self.available_nickname(request, &mut response)?;
        let mail_address = self.available_mail_address(request, &mut response)?;
        let password = valid_password(request, &mut response);

        let (Some(nickname), Some(mail_address), Some(password)) =
            (nickname, mail_address, password)
        else {
            debug!(?response, "registration rejected");
            return Ok(response);
        };

        let identity = self.identities.generate();
        self.registry.register_account(&RegisterAccountCommand {
            identity,
            nickname,
            mail_address,
            hashed_password: self.hasher.hash(&password)?,
        })?;

        info!(%identity, "account registered");
        response.account_identity = Some(identity);
        Ok(response)
    }

    fn available_nickname(
        &self,
        request: &UserRegistrationRequest,
        response: &mut UserRegistrationResponse,
    ) -> Result<Option<Nickname>> {
        let nickname = match Nickname::new(request.nickname.as_deref()) {
            Ok(nickname) => nickname,
            Err(error) => {
                match error {
                    NicknameError::Missing => response.nickname_is_missing = true,
                    NicknameError::TooShort { .. } => response.nickname_is_too_short = true,
                    NicknameError::TooLong { .. } => response.nickname_is_too_long = true,
                    NicknameError::Invalid(_) => response.nickname_is_invalid = true,
                }
                return Ok(None);
            }
        };

        if self.accounts.find_by_nickname(&nickname)?.is_some() {
            response.nickname_is_already_taken = true;
            return Ok(None);
        }
        Ok(Some(nickname))
    }

    fn available_mail_address(
        &self,
        request: &UserRegistrationRequest,
        response: &mut UserRegistrationResponse,
    ) -> Result<Option<MailAddress>> {
        let mail_address = match MailAddress::new(request.mail_address.as_deref()) {
            Ok(mail_address) => mail_address,
            Err(MailAddressError::Missing) => {
                response.mail_address_is_missing = true;
                return Ok(None);
            }
            Err(MailAddressError::Invalid(_)) => {
                response.mail_address_is_invalid = true;
                return Ok(None);
            }
        };

        if self.accounts.find_by_mail_address(&mail_address)?.is_some() {
            response.mail_address_is_already_taken = true;
            return Ok(None);
        }
        Ok(Some(mail_address))
    }
}

fn valid_password(
    request: &UserRegistrationRequest,
    response: &mut UserRegistrationResponse,
) -> Option<PlainPassword> {
    match PlainPassword::new(request.password.as_deref()) {
        Ok(password) => Some(password),
        Err(error) => {
            match error {
                PasswordError::Missing => response.password_is_missing = true,
                PasswordError::TooShort { .. } => response.password_is_too_short = true,
                PasswordError::TooLong { .. } => response.password_is_too_long = true,
                PasswordError::WithoutLowercase
                | PasswordError::WithoutUppercase
                | PasswordError::WithoutDigits
                | PasswordError::WithoutSymbols => response.password_is_too_weak = true,
            }
            None
        }
    }
}
