use axum::Json;
use serde::{Deserialize, Serialize};

use chess_repertoire_core::Fen;

#[derive(Debug, Deserialize)]
pub struct FenForm {
    pub fen: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FenValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn validate(Json(form): Json<FenForm>) -> Json<FenValidation> {
    Json(match Fen::new(form.fen.as_deref()) {
        Ok(fen) => FenValidation {
            valid: true,
            canonical: Some(fen.into_string()),
            error: None,
        },
        Err(error) => FenValidation {
            valid: false,
            canonical: None,
            error: Some(error.to_string()),
        },
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::testing::{app, send};

    #[tokio::test]
    async fn test_valid_fen_is_canonicalized() {
        let (status, body) = send(
            &app(),
            "POST",
            "/fen/validate",
            None,
            Some(json!({ "fen": "  8/8/8/8/8/8/8/k6K   w - -  0 1 " })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["canonical"], "8/8/8/8/8/8/8/k6K w - - 0 1");
    }

    #[tokio::test]
    async fn test_invalid_fen_reports_first_failure() {
        let app = app();

        let (_, body) = send(
            &app,
            "POST",
            "/fen/validate",
            None,
            Some(json!({ "fen": "8/8/11111111/8/8/8/8/6kK w - - 0 1" })),
        )
        .await;
        assert_eq!(body["valid"], false);
        assert!(body["error"].as_str().unwrap().contains("11111111"));

        let (_, body) = send(&app, "POST", "/fen/validate", None, Some(json!({}))).await;
        assert_eq!(body["error"], "FEN is missing");
    }
}
