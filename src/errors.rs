use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorDetail;

/// Caller-input failures of the signup and unregister operations.
///
/// None of these leave the directory modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up")]
    AlreadyRegistered,
    #[error("Student is not signed up for this activity")]
    NotRegistered,
}

impl SignupError {
    pub fn status(&self) -> StatusCode {
        match self {
            SignupError::NotFound => StatusCode::NOT_FOUND,
            SignupError::AlreadyRegistered | SignupError::NotRegistered => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        let body = Json(ErrorDetail {
            detail: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(SignupError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(SignupError::AlreadyRegistered.status(), StatusCode::BAD_REQUEST);
        assert_eq!(SignupError::NotRegistered.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn messages_carry_checkable_phrases() {
        assert!(SignupError::NotFound.to_string().contains("Activity not found"));
        assert!(SignupError::AlreadyRegistered
            .to_string()
            .to_lowercase()
            .contains("already signed up"));
        assert!(SignupError::NotRegistered
            .to_string()
            .to_lowercase()
            .contains("not signed up"));
    }

    #[tokio::test]
    async fn response_body_is_detail_object() {
        let resp = SignupError::NotRegistered.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "detail": "Student is not signed up for this activity" })
        );
    }
}
