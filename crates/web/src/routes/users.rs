use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use chess_repertoire_core::use_cases::{RegisterUserInteractor, UserRegistrationRequest};

use crate::error::AppError;
use crate::AppState;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UserRegistrationRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Argon2 hashing runs on the blocking pool
    let response = tokio::task::spawn_blocking(move || {
        let db = state.db()?;
        let interactor =
            RegisterUserInteractor::new(&*db, &*db, &state.hasher, &state.identities);
        interactor.execute(&request).map_err(AppError::from)
    })
    .await??;

    let status = if response.is_success() {
        StatusCode::CREATED
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    Ok((status, Json(response)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::testing::{app, send, PASSWORD};

    #[tokio::test]
    async fn test_register_then_reject_duplicate() {
        let app = app();
        let body = json!({
            "nickname": "magnus",
            "mail_address": "magnus@chess.com",
            "password": PASSWORD,
        });

        let (status, response) = send(&app, "POST", "/users", None, Some(body.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(response["account_identity"].is_string());

        let (status, response) = send(&app, "POST", "/users", None, Some(body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response["nickname_is_already_taken"], true);
        assert_eq!(response["mail_address_is_already_taken"], true);
    }

    #[tokio::test]
    async fn test_concurrent_registrations() {
        let app = app();
        let body = |nickname: &str| {
            json!({
                "nickname": nickname,
                "mail_address": format!("{nickname}@chess.com"),
                "password": PASSWORD,
            })
        };

        let (magnus, hikaru) = tokio::join!(
            send(&app, "POST", "/users", None, Some(body("magnus"))),
            send(&app, "POST", "/users", None, Some(body("hikaru"))),
        );
        assert_eq!(magnus.0, StatusCode::CREATED);
        assert_eq!(hikaru.0, StatusCode::CREATED);
        assert_ne!(magnus.1["account_identity"], hikaru.1["account_identity"]);
    }

    #[tokio::test]
    async fn test_missing_fields_are_flagged() {
        let (status, response) = send(&app(), "POST", "/users", None, Some(json!({}))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response["nickname_is_missing"], true);
        assert_eq!(response["mail_address_is_missing"], true);
        assert_eq!(response["password_is_missing"], true);
        assert!(response.get("account_identity").is_none());
    }
}
