//! Interactors: request in, flag-based response out
//!
//! Validation failures never surface as `Err`. They are reported as flags in
//! the response so a caller can show every problem at once. `Err` is kept for
//! storage and hashing failures.

mod login;
mod position_creation;
mod position_listing;
mod registration;

#[cfg(test)]
pub(crate) mod doubles;

pub use login::{LoginInteractor, LoginRequest};
pub use position_creation::{CreatePositionInteractor, PositionCreationRequest, PositionCreationResponse};
pub use position_listing::{ListPositionsInteractor, PositionListingRequest, PositionListingResponse};
pub use registration::{RegisterUserInteractor, UserRegistrationRequest, UserRegistrationResponse};
