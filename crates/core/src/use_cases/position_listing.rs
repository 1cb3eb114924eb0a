//! Listing the positions saved by the authenticated user

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ports::{Authenticator, PositionQueries};
use crate::storage::StoredPosition;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionListingRequest {
    pub authentication_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PositionListingResponse {
    pub authentication_token_is_missing: bool,
    pub authentication_token_is_invalid: bool,
    pub positions: Vec<StoredPosition>,
}

impl PositionListingResponse {
    pub fn is_unauthenticated(&self) -> bool {
        self.authentication_token_is_missing || self.authentication_token_is_invalid
    }
}

pub struct ListPositionsInteractor<'a> {
    authenticator: &'a dyn Authenticator,
    positions: &'a dyn PositionQueries,
}

impl<'a> ListPositionsInteractor<'a> {
    pub fn new(authenticator: &'a dyn Authenticator, positions: &'a dyn PositionQueries) -> Self {
        Self {
            authenticator,
            positions,
        }
    }

    pub fn execute(&self, request: &PositionListingRequest) -> Result<PositionListingResponse> {
        let mut response = PositionListingResponse::default();

        let Some(token) = request.authentication_token.as_deref() else {
            response.authentication_token_is_missing = true;
            return Ok(response);
        };
        match self.authenticator.authenticate(token)? {
            Some(user) => response.positions = self.positions.find_by_owner(&user.identity)?,
            None => response.authentication_token_is_invalid = true,
        }
        Ok(response)
    }
}
