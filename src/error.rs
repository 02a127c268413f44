//! Error types for the story API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// == API Error Enum ==
/// Unified error type for the story API.
///
/// Expected upstream flakiness never reaches this type; the upstream client
/// absorbs it and the aggregator only ever sees fewer stories. An `ApiError`
/// therefore always represents a genuinely unexpected internal failure.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Callers get a generic message; the detail stays in the logs.
        match self {
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while fetching stories.",
            )
                .into_response(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the story API.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_display() {
        let err = ApiError::Internal("cache fault".to_string());
        assert_eq!(err.to_string(), "Internal error: cache fault");
    }

    #[tokio::test]
    async fn test_internal_error_response_is_500_with_generic_body() {
        let response = ApiError::Internal("secret detail".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!body.is_empty());
        assert!(!body.contains("secret detail"));
    }
}
