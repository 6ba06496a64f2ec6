//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2002,
///     "message": "session not found: 9be4…",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see the ranges on [`GatewayError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                |
/// |-----------|-----------------|----------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request            |
/// | 2000–2999 | Not Found       | 404 Not Found              |
/// | 3000–3999 | Server/Upstream | 500 / 502                  |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Stream was not found in the catalog; carries the looked-up ID
    /// or URL.
    #[error("stream not found: {0}")]
    StreamNotFound(String),

    /// Session with the given ID was not found.
    #[error("session not found: {0}")]
    SessionNotFound(uuid::Uuid),

    /// View with the given ID was not found.
    #[error("view not found: {0}")]
    ViewNotFound(uuid::Uuid),

    /// Data source with the given ID was not found.
    #[error("data source not found: {0}")]
    SourceNotFound(uuid::Uuid),

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Unsupported or invalid data source kind string.
    #[error("invalid source kind: {0}")]
    InvalidSourceKind(String),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// A data source fetch or parse failed during a synchronous sync.
    #[error("source sync failed: {0}")]
    SourceSync(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::InvalidSourceKind(_) => 1002,
            Self::StreamNotFound(_) => 2001,
            Self::SessionNotFound(_) => 2002,
            Self::ViewNotFound(_) => 2003,
            Self::SourceNotFound(_) => 2004,
            Self::Persistence(_) => 3001,
            Self::SourceSync(_) => 3002,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidSourceKind(_) => StatusCode::BAD_REQUEST,
            Self::StreamNotFound(_)
            | Self::SessionNotFound(_)
            | Self::ViewNotFound(_)
            | Self::SourceNotFound(_) => StatusCode::NOT_FOUND,
            Self::SourceSync(_) => StatusCode::BAD_GATEWAY,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for GatewayError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_map_to_404() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(
            GatewayError::SessionNotFound(id).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GatewayError::StreamNotFound(id.to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(GatewayError::SessionNotFound(id).error_code(), 2002);
    }

    #[test]
    fn validation_maps_to_400() {
        let err = GatewayError::InvalidRequest("grid_cols must be positive".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), 1001);
    }

    #[test]
    fn source_sync_maps_to_502() {
        let err = GatewayError::SourceSync("connection refused".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn error_body_serializes_without_null_details() {
        let body = ErrorResponse {
            error: ErrorBody {
                code: 1001,
                message: "invalid".to_string(),
                details: None,
            },
        };
        let json = serde_json::to_string(&body);
        let Ok(json) = json else {
            panic!("serialization failed");
        };
        assert!(!json.contains("details"));
    }
}
