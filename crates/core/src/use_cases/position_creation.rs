//! Saving a position under a name, for the authenticated user

use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info};

use crate::error::Result;
use crate::fen::{Fen, FenError};
use crate::identity::{Identity, IdentityGenerator};
use crate::ports::{Authenticator, PositionCommands, PositionQueries, RegisterPositionCommand};
use crate::position::{PositionName, PositionNameError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionCreationRequest {
    pub authentication_token: Option<String>,
    pub name: Option<String>,
    pub fen: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PositionCreationResponse {
    pub authentication_token_is_missing: bool,
    pub authentication_token_is_invalid: bool,

    pub name_is_missing: bool,
    pub name_is_too_long: bool,
    pub name_is_already_used: bool,

    pub fen_is_missing: bool,
    pub fen_is_invalid: bool,
    pub fen_is_already_used: bool,

    /// Why the FEN was rejected, when `fen_is_invalid` is raised.
    #[serde(
        serialize_with = "serialize_fen_error",
        skip_serializing_if = "Option::is_none"
    )]
    pub fen_error: Option<FenError>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_identity: Option<Identity>,
}

impl PositionCreationResponse {
    pub fn is_success(&self) -> bool {
        self.position_identity.is_some()
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.authentication_token_is_missing || self.authentication_token_is_invalid
    }
}

fn serialize_fen_error<S: Serializer>(
    error: &Option<FenError>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match error {
        Some(error) => serializer.collect_str(error),
        None => serializer.serialize_none(),
    }
}

pub struct CreatePositionInteractor<'a> {
    authenticator: &'a dyn Authenticator,
    positions: &'a dyn PositionQueries,
    registry: &'a dyn PositionCommands,
    identities: &'a dyn IdentityGenerator,
}

impl<'a> CreatePositionInteractor<'a> {
    pub fn new(
        authenticator: &'a dyn Authenticator,
        positions: &'a dyn PositionQueries,
        registry: &'a dyn PositionCommands,
        identities: &'a dyn IdentityGenerator,
    ) -> Self {
        Self {
            authenticator,
            positions,
            registry,
            identities,
        }
    }

    pub fn execute(&self, request: &PositionCreationRequest) -> Result<PositionCreationResponse> {
        let mut response = PositionCreationResponse::default();

        let Some(token) = request.authentication_token.as_deref() else {
            response.authentication_token_is_missing = true;
            return Ok(response);
        };
        let Some(user) = self.authenticator.authenticate(token)? else {
            response.authentication_token_is_invalid = true;
            return Ok(response);
        };

        let name = self.unused_name(&user.identity, request, &mut response)?;
        let fen = self.unused_fen(&user.identity, request, &mut response)?;

        let (Some(name), Some(fen)) = (name, fen) else {
            debug!(owner = %user.identity, ?response, "position rejected");
            return Ok(response);
        };

        let identity = self.identities.generate();
        self.registry.register_position(&RegisterPositionCommand {
            identity,
            owner: user.identity,
            name,
            fen,
        })?;

        info!(%identity, owner = %user.identity, "position registered");
        response.position_identity = Some(identity);
        Ok(response)
    }

    fn unused_name(
        &self,
        owner: &Identity,
        request: &PositionCreationRequest,
        response: &mut PositionCreationResponse,
    ) -> Result<Option<PositionName>> {
        let name = match PositionName::new(request.name.as_deref()) {
            Ok(name) => name,
            Err(PositionNameError::Missing) => {
                response.name_is_missing = true;
                return Ok(None);
            }
            Err(PositionNameError::TooLong { .. }) => {
                response.name_is_too_long = true;
                return Ok(None);
            }
        };

        if self.positions.find_by_owner_and_name(owner, &name)?.is_some() {
            response.name_is_already_used = true;
            return Ok(None);
        }
        Ok(Some(name))
    }

    fn unused_fen(
        &self,
        owner: &Identity,
        request: &PositionCreationRequest,
        response: &mut PositionCreationResponse,
    ) -> Result<Option<Fen>> {
        let fen = match Fen::new(request.fen.as_deref()) {
            Ok(fen) => fen,
            Err(FenError::NullFen) => {
                response.fen_is_missing = true;
                return Ok(None);
            }
            Err(error) => {
                response.fen_is_invalid = true;
                response.fen_error = Some(error);
                return Ok(None);
            }
        };

        if self.positions.find_by_owner_and_fen(owner, &fen)?.is_some() {
            response.fen_is_already_used = true;
            return Ok(None);
        }
        Ok(Some(fen))
    }
}
