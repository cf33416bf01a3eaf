//! Create handler.
//!
//! `POST /medications`

use axum::{Json, extract::State, http::StatusCode};
use medication_persistence::core::MedicationStorage;
use medication_persistence::types::{Medication, MedicationDraft};
use tracing::{error, info};

use crate::error::RestResult;
use crate::extractors::MedicationPayload;
use crate::state::AppState;

/// Handler for creating a medication.
///
/// The server assigns `id`, `created_at` and `updated_at`; any values for
/// them in the body are ignored.
///
/// # Response
///
/// - `201 Created` - The stored medication
/// - `400 Bad Request` - `Invalid request payload`
/// - `500 Internal Server Error` - Any service failure, including an empty
///   name, with the raw error message as body
#[utoipa::path(
    post,
    path = "/medications",
    tag = "medications",
    request_body = MedicationDraft,
    responses(
        (status = 201, description = "Medication created", body = Medication),
        (status = 400, description = "Invalid request payload"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Service error message")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    MedicationPayload(draft): MedicationPayload,
) -> RestResult<(StatusCode, Json<Medication>)>
where
    S: MedicationStorage + 'static,
{
    let medication = state.service().create(&draft).await.inspect_err(|e| {
        error!(error = %e, "Error creating medication");
    })?;

    info!(id = medication.id, name = %medication.name, "Created medication");
    Ok((StatusCode::CREATED, Json(medication)))
}
