//! Error types for the persistence layer.
//!
//! This module defines all error types used by the storage port, its
//! backends and the domain service, following a hierarchy that separates
//! resource state errors, validation errors and backend errors.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage and service operations.
///
/// This enum encompasses all possible errors that can occur during
/// persistence operations, organized by category.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Resource state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StorageError {
    /// Returns true if this error means the requested medication does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::Resource(ResourceError::NotFound { .. }))
    }

    /// Returns true if this error is a business-rule violation.
    pub fn is_validation(&self) -> bool {
        matches!(self, StorageError::Validation(_))
    }
}

/// Errors related to resource state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested medication was not found.
    #[error("medication not found")]
    NotFound { id: i64 },
}

/// Errors related to medication validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The medication name is empty.
    #[error("medication name cannot be empty")]
    EmptyName,
}

/// Errors from the underlying database backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Failed to connect to the backend.
    #[error("connection to {backend_name} failed: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// The backend is temporarily unavailable.
    #[error("{backend_name} unavailable: {message}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// The storage has been closed and can no longer serve requests.
    #[error("{backend_name} storage is closed")]
    Closed { backend_name: String },

    /// Internal backend error (query failure, row decoding, schema setup).
    #[error("{backend_name} error: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
