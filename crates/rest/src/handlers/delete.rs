//! Delete handler.
//!
//! `DELETE /medications/{id}`

use axum::{Json, extract::State};
use medication_persistence::core::MedicationStorage;
use tracing::{error, info};

use super::MessageResponse;
use crate::error::RestResult;
use crate::extractors::MedicationId;
use crate::state::AppState;

/// Handler for deleting a medication.
///
/// Deletion is permanent. Deleting an unknown id is a 500 carrying
/// `medication not found`.
#[utoipa::path(
    delete,
    path = "/medications/{id}",
    tag = "medications",
    params(("id" = i64, Path, description = "Medication ID")),
    responses(
        (status = 200, description = "Medication deleted", body = MessageResponse),
        (status = 400, description = "Invalid medication ID"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Service error message")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    MedicationId(id): MedicationId,
) -> RestResult<Json<MessageResponse>>
where
    S: MedicationStorage + 'static,
{
    state.service().delete(id).await.inspect_err(|e| {
        error!(id, error = %e, "Error deleting medication");
    })?;

    info!(id, "Deleted medication");
    Ok(Json(MessageResponse::new("successfully deleted")))
}
