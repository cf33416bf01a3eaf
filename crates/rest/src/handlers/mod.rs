//! HTTP request handlers for the medication API.
//!
//! - [`list`] - List medications with pagination
//! - [`create`] - Create a medication
//! - [`read`] - Read a medication by id
//! - [`update`] - Update a medication's writable fields
//! - [`delete`] - Delete a medication
//! - [`health`] - Health, liveness and readiness probes

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod read;
pub mod update;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use list::list_handler;
pub use read::read_handler;
pub use update::update_handler;

/// Acknowledgement body returned by update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome, e.g. `successfully updated`.
    pub message: String,
}

impl MessageResponse {
    /// Creates a response with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
