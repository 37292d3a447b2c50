//! The JSON error envelope.
//!
//! Every failed request is reported as `{"error": {"code", "message",
//! "fields"?}}`. The `fields` map is only present for validation failures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stable machine-readable error codes.
pub mod error_codes {
    /// Malformed request (bad id, missing body field, ...).
    pub const INVALID_REQUEST: &str = "invalid_request";
    /// One or more form fields failed validation.
    pub const VALIDATION_FAILED: &str = "validation_failed";
    /// Registration email is already taken.
    pub const DUPLICATE_EMAIL: &str = "duplicate_email";
    /// Login failed; email and password misses are not distinguished.
    pub const INVALID_CREDENTIALS: &str = "invalid_credentials";
    /// Missing or unverifiable bearer token.
    pub const UNAUTHORIZED: &str = "unauthorized";
    /// Resource does not exist, or is not visible to the caller.
    pub const NOT_FOUND: &str = "not_found";
    /// Unexpected server failure.
    pub const INTERNAL_ERROR: &str = "internal_error";
}

/// Error payload inside the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable code (see [`error_codes`]).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Field-level messages for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
}

impl ApiError {
    /// Creates a new error payload.
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            fields: None,
        }
    }

    /// Attaches field-level messages.
    pub fn with_fields(mut self, fields: BTreeMap<String, String>) -> Self {
        self.fields = Some(fields);
        self
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// The envelope itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

impl ErrorEnvelope {
    /// Wraps an error payload.
    pub fn new(error: ApiError) -> Self {
        Self { error }
    }
}
