//! Update handler.
//!
//! `PUT /medications/{id}`

use axum::{Json, extract::State};
use medication_persistence::core::MedicationStorage;
use medication_persistence::types::MedicationDraft;
use tracing::{error, info};

use super::MessageResponse;
use crate::error::RestResult;
use crate::extractors::{MedicationId, MedicationPayload};
use crate::state::AppState;

/// Handler for updating a medication.
///
/// Only `name`, `dosage` and `form` are taken from the body. The id is
/// validated before the body is read.
///
/// # Response
///
/// - `200 OK` - `{"message": "successfully updated"}`
/// - `400 Bad Request` - `Invalid medication ID` or `Invalid request payload`
/// - `500 Internal Server Error` - Any service failure (unknown id, empty
///   name, storage error) with the raw error message as body
#[utoipa::path(
    put,
    path = "/medications/{id}",
    tag = "medications",
    params(("id" = i64, Path, description = "Medication ID")),
    request_body = MedicationDraft,
    responses(
        (status = 200, description = "Medication updated", body = MessageResponse),
        (status = 400, description = "Invalid medication ID or request payload"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Service error message")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    MedicationId(id): MedicationId,
    MedicationPayload(draft): MedicationPayload,
) -> RestResult<Json<MessageResponse>>
where
    S: MedicationStorage + 'static,
{
    state.service().update(id, draft).await.inspect_err(|e| {
        error!(id, error = %e, "Error updating medication");
    })?;

    info!(id, "Updated medication");
    Ok(Json(MessageResponse::new("successfully updated")))
}
