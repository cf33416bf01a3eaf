//! Read handler.
//!
//! `GET /medications/{id}`

use axum::{Json, extract::State};
use medication_persistence::core::MedicationStorage;
use medication_persistence::types::Medication;
use tracing::{error, info};

use crate::error::{RestError, RestResult};
use crate::extractors::MedicationId;
use crate::state::AppState;

/// Handler for reading one medication.
///
/// Every failure on this path, including a storage outage, is reported as
/// 404 `Medication not found`.
#[utoipa::path(
    get,
    path = "/medications/{id}",
    tag = "medications",
    params(("id" = i64, Path, description = "Medication ID")),
    responses(
        (status = 200, description = "The medication", body = Medication),
        (status = 400, description = "Invalid medication ID"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Medication not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    MedicationId(id): MedicationId,
) -> RestResult<Json<Medication>>
where
    S: MedicationStorage + 'static,
{
    let medication = state.service().get_by_id(id).await.map_err(|e| {
        error!(id, error = %e, "Error fetching medication");
        RestError::medication_not_found()
    })?;

    info!(id, "Fetched medication");
    Ok(Json(medication))
}
