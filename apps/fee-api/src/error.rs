//! Error types for the Fee API.
//!
//! Every error the routes can produce maps to a client-facing JSON body of
//! the shape `{"detail": "<message>"}` with an appropriate status code.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use courier_core::ValidationError;

/// Fee API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The order failed field or timestamp validation inside the core.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The request body could not be extracted (malformed JSON, missing
    /// fields, wrong types). Produced before the core ever runs.
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let err = ApiError::from(ValidationError::MustBeNonNegative {
            field: "cart_value".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_message_survives_the_wrap() {
        let err = ApiError::from(ValidationError::InvalidFormat {
            field: "time".to_string(),
            reason: "premature end of input".to_string(),
        });
        assert_eq!(err.to_string(), "time has invalid format: premature end of input");
    }
}
