//! Axum extractors for medication requests.
//!
//! Each extractor owns the exact rejection the API promises for its input:
//!
//! - [`Pagination`] - Lenient `limit`/`offset` query parameters (never rejects)
//! - [`MedicationId`] - Integer id path segment (400 `Invalid medication ID`)
//! - [`MedicationPayload`] - JSON medication body (400 `Invalid request payload`)

mod medication_id;
mod pagination;
mod payload;

pub use medication_id::MedicationId;
pub use pagination::Pagination;
pub use payload::MedicationPayload;
