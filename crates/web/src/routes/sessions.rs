use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use chess_repertoire_core::use_cases::{LoginInteractor, LoginRequest};

use crate::error::AppError;
use crate::AppState;

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let token = tokio::task::spawn_blocking(move || {
        let db = state.db()?;
        let interactor = LoginInteractor::new(&*db, &state.hasher, &*db);
        interactor.execute(&request).map_err(AppError::from)
    })
    .await??;

    Ok(match token {
        Some(token) => (StatusCode::OK, Json(json!({ "token": token }))),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid credentials" })),
        ),
    })
}
