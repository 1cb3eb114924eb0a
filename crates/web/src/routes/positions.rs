use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use std::sync::Arc;

use chess_repertoire_core::use_cases::{
    CreatePositionInteractor, ListPositionsInteractor, PositionCreationRequest,
    PositionListingRequest,
};

use super::bearer_token;
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PositionForm {
    pub name: Option<String>,
    pub fen: Option<String>,
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(form): Json<PositionForm>,
) -> Result<impl IntoResponse, AppError> {
    let request = PositionCreationRequest {
        authentication_token: bearer_token(&headers),
        name: form.name,
        fen: form.fen,
    };

    let db = state.db()?;
    let response =
        CreatePositionInteractor::new(&*db, &*db, &*db, &state.identities).execute(&request)?;

    let status = if response.is_success() {
        StatusCode::CREATED
    } else if response.is_unauthenticated() {
        StatusCode::UNAUTHORIZED
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    Ok((status, Json(response)))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let request = PositionListingRequest {
        authentication_token: bearer_token(&headers),
    };

    let db = state.db()?;
    let response = ListPositionsInteractor::new(&*db, &*db).execute(&request)?;

    let status = if response.is_unauthenticated() {
        StatusCode::UNAUTHORIZED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(response)))
}
