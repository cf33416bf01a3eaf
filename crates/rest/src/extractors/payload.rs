//! Medication request body extractor.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use medication_persistence::types::MedicationDraft;
use tracing::debug;

use crate::error::RestError;

/// A JSON medication body decoded into its client-writable fields.
///
/// The body is decoded regardless of `Content-Type`. Unknown fields,
/// including `id` and the timestamps, are ignored; omitted fields are empty.
/// Anything that is not a JSON object of strings rejects with 400
/// `Invalid request payload`.
#[derive(Debug, Clone)]
pub struct MedicationPayload(pub MedicationDraft);

impl<S> FromRequest<S> for MedicationPayload
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| RestError::invalid_payload())?;

        serde_json::from_slice::<MedicationDraft>(&bytes)
            .map(MedicationPayload)
            .map_err(|e| {
                debug!(error = %e, "Rejected medication payload");
                RestError::invalid_payload()
            })
    }
}
