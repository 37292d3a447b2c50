//! Server error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use api_protocol::{ApiError, ErrorEnvelope, error_codes};
use contact_store::StoreError;
use validation::FieldErrors;

/// Server error type.
///
/// Every variant maps to a JSON error envelope; nothing here ever takes the
/// process down on a request.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid request parameters (bad id, malformed body).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// One or more form fields failed validation.
    #[error("Validation failed")]
    Validation(FieldErrors),

    /// Registration email already taken.
    #[error("Email already exists")]
    DuplicateEmail,

    /// Login failure; unknown email and wrong password are reported
    /// identically.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Resource not found (or owned by someone else, indistinguishably).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication required.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Token handling error.
    #[error("Auth error: {0}")]
    Auth(#[from] auth::AuthError),

    /// Store error.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ServerError::InvalidRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new(error_codes::INVALID_REQUEST, msg),
            ),
            ServerError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ApiError::new(error_codes::VALIDATION_FAILED, "Validation failed")
                    .with_fields(errors.into_messages()),
            ),
            ServerError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                ApiError::new(error_codes::DUPLICATE_EMAIL, "Email already exists"),
            ),
            ServerError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                ApiError::new(error_codes::INVALID_CREDENTIALS, "Invalid email or password"),
            ),
            ServerError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ApiError::new(error_codes::NOT_FOUND, msg))
            }
            ServerError::AuthenticationRequired => (
                StatusCode::UNAUTHORIZED,
                ApiError::new(error_codes::UNAUTHORIZED, "Authentication required"),
            ),
            ServerError::Auth(e) => (
                StatusCode::UNAUTHORIZED,
                ApiError::new(error_codes::UNAUTHORIZED, e.to_string()),
            ),
            // Owner-scoped store misses surface as plain not-found.
            ServerError::Store(StoreError::NotFound { entity_type, .. }) => (
                StatusCode::NOT_FOUND,
                ApiError::new(error_codes::NOT_FOUND, format!("{entity_type} not found")),
            ),
            ServerError::Store(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new(error_codes::INTERNAL_ERROR, e.to_string()),
            ),
            ServerError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new(error_codes::INTERNAL_ERROR, msg),
            ),
        };

        (status, Json(ErrorEnvelope::new(error))).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_maps_to_404() {
        let err = ServerError::Store(StoreError::not_found("Contact", "abc"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let mut errors = FieldErrors::new();
        errors.push("name", "Name is required");
        let response = ServerError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        let err = ServerError::InvalidCredentials;
        assert_eq!(err.to_string(), "Invalid email or password");
    }
}
