use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `{"error": <title>, "details": <message>}`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body is not a JSON object.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing model credential. Raised before any outbound call.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The model call failed or timed out. The user may retry.
    #[error("AI service error: {0}")]
    Service(String),

    /// Unexpected server-side failure, e.g. the request body could not be read.
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Body-read failures keep the `{error, details}` shape: client-caused ones
/// (such as an oversized body) are `InvalidRequest`, the rest are `Internal`.
impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status().is_client_error() {
            AppError::InvalidRequest(rejection.body_text())
        } else {
            AppError::Internal(
                anyhow::Error::new(rejection).context("Failed to read request body"),
            )
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Service(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (title, details) = match &self {
            AppError::InvalidRequest(msg) => ("Invalid request", msg.clone()),
            AppError::Validation(msg) => ("Validation error", msg.clone()),
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {msg}");
                ("API configuration error", msg.clone())
            }
            AppError::Service(msg) => {
                tracing::error!("AI service error: {msg}");
                (
                    "AI Service Error",
                    "Failed to generate roadmap content. Please try again.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                ("Server Error", e.to_string())
            }
        };

        let body = Json(json!({
            "error": title,
            "details": details,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InvalidRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Config("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Service("x".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = AppError::Validation("Missing required field: province".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Validation error");
        assert_eq!(body["details"], "Missing required field: province");
    }
}
