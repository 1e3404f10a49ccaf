//! Error types for docnorm

use crate::services::RegistryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upstream registry failure (502)
    #[error("Bad gateway: {0}")]
    BadGateway(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<RegistryError> for ApiError {
    /// Every registry failure surfaces to the caller as a gateway-class
    /// error carrying the underlying message.
    fn from(err: RegistryError) -> Self {
        ApiError::BadGateway(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, "BAD_GATEWAY", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_errors_map_to_bad_gateway() {
        let err: ApiError = RegistryError::TransportExhausted {
            path: "/api/data".to_string(),
            attempts: 5,
        }
        .into();

        match err {
            ApiError::BadGateway(msg) => assert!(msg.contains("/api/data")),
            other => panic!("expected BadGateway, got {:?}", other),
        }
    }
}
