//! Medication id path extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::RestError;

/// The `{id}` segment of `/medications/{id}`, parsed as an integer.
///
/// Rejects with 400 `Invalid medication ID` when the segment is not an
/// integer. Negative ids parse; they simply match no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedicationId(pub i64);

impl<S> FromRequestParts<S> for MedicationId
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| RestError::invalid_id())?;

        raw.parse::<i64>()
            .map(MedicationId)
            .map_err(|_| RestError::invalid_id())
    }
}
