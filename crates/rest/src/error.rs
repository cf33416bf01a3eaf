//! Error types for the medication REST API.
//!
//! Every error is rendered as a plain-text body (`text/plain; charset=utf-8`)
//! holding the message alone.
//!
//! # Error Mapping
//!
//! | Situation | HTTP Status | Body |
//! |-----------|-------------|------|
//! | Non-numeric id | 400 | `Invalid medication ID` |
//! | Malformed JSON body | 400 | `Invalid request payload` |
//! | Missing or invalid bearer token | 401 | `Unauthorized` |
//! | Any failure reading one medication | 404 | `Medication not found` |
//! | Any failure listing medications | 500 | `Failed to fetch medications` |
//! | Any failure on create, update or delete | 500 | the raw error message |
//!
//! Write paths deliberately collapse validation and not-found errors into
//! 500 with the underlying message; see the handler modules.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use medication_persistence::error::StorageError;

/// Body for a non-numeric id path segment.
pub const INVALID_ID_MESSAGE: &str = "Invalid medication ID";
/// Body for a request body that is not a medication object.
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload";
/// Body for any failed single-medication read.
pub const NOT_FOUND_MESSAGE: &str = "Medication not found";
/// Body for any failed listing.
pub const LIST_FAILED_MESSAGE: &str = "Failed to fetch medications";
/// Body for a rejected bearer token.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Bad request - malformed input (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Missing or invalid credentials (HTTP 401).
    Unauthorized,

    /// Medication not found (HTTP 404).
    NotFound {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// 400 for an id path segment that is not an integer.
    pub fn invalid_id() -> Self {
        RestError::BadRequest {
            message: INVALID_ID_MESSAGE.to_string(),
        }
    }

    /// 400 for a body that does not decode as a medication.
    pub fn invalid_payload() -> Self {
        RestError::BadRequest {
            message: INVALID_PAYLOAD_MESSAGE.to_string(),
        }
    }

    /// 404 with the fixed read-path message.
    pub fn medication_not_found() -> Self {
        RestError::NotFound {
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }

    /// Returns the HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::Unauthorized => StatusCode::UNAUTHORIZED,
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            RestError::BadRequest { message }
            | RestError::NotFound { message }
            | RestError::InternalError { message } => message,
            RestError::Unauthorized => UNAUTHORIZED_MESSAGE,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::Unauthorized => write!(f, "Unauthorized"),
            RestError::NotFound { message } => write!(f, "Not found: {}", message),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        // A `String` body is served as text/plain; charset=utf-8.
        (self.status_code(), self.message().to_string()).into_response()
    }
}

/// Write-path conversion: every storage or service failure becomes a 500
/// carrying the raw error message.
impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

/// Result type for REST operations.
pub type RestResult<T> = Result<T, RestError>;
