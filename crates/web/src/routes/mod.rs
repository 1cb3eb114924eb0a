use axum::{
    http::{header::AUTHORIZATION, HeaderMap},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::AppState;

pub mod fen;
pub mod positions;
pub mod sessions;
pub mod users;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", post(users::register))
        .route("/sessions", post(sessions::login))
        .route("/positions", post(positions::create).get(positions::list))
        .route("/fen/validate", post(fen::validate))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn health() -> &'static str {
    "OK"
}

/// Token of an `Authorization: Bearer <token>` header. A header without the
/// scheme is taken as the bare token.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    Some(token.to_string())
}
