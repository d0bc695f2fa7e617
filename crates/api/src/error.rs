//! Error responses.
//!
//! Every failure leaves a handler as an [`ApiError`]. The body is
//! `{"error": CODE, "message": ...}`, or `{"error": CODE, "messages": [...]}`
//! for validation failures.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ledgerly_shared::AppError;
use serde_json::json;
use tracing::error;

/// An error on its way to the client.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl<E> From<E> for ApiError
where
    E: Into<AppError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl ApiError {
    /// A single validation message.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self(AppError::Validation(vec![message.into()]))
    }

    /// Maps a JSON body rejection to a validation failure.
    #[must_use]
    pub fn from_json_rejection(rejection: &JsonRejection) -> Self {
        Self::invalid(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        let body = match &self.0 {
            AppError::Validation(messages) => json!({
                "error": self.0.error_code(),
                "messages": messages,
            }),
            other => json!({
                "error": other.error_code(),
                "message": other.messages().join(", "),
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    async fn body(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[rstest]
    #[case(AppError::Unauthorized("Invalid token".into()), StatusCode::UNAUTHORIZED)]
    #[case(AppError::InvalidSession("Invalid session".into()), StatusCode::NOT_FOUND)]
    #[case(AppError::OwnershipMismatch("Unauthorized".into()), StatusCode::CONFLICT)]
    #[case(AppError::Unprocessable("Unable to delete".into()), StatusCode::UNPROCESSABLE_ENTITY)]
    #[tokio::test]
    async fn test_status_mapping(#[case] err: AppError, #[case] status: StatusCode) {
        assert_eq!(ApiError(err).into_response().status(), status);
    }

    #[tokio::test]
    async fn test_validation_body_lists_messages() {
        let response = ApiError(AppError::Validation(vec![
            "\"value\" is required".into(),
            "\"type\" is required".into(),
        ]))
        .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body(response).await,
            json!({
                "error": "VALIDATION_ERROR",
                "messages": ["\"value\" is required", "\"type\" is required"],
            })
        );
    }

    #[tokio::test]
    async fn test_internal_cause_is_hidden() {
        let response = ApiError(AppError::Database("connection refused".into())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body(response).await,
            json!({"error": "DATABASE_ERROR", "message": "Internal server error"})
        );
    }
}
