//! List handler.
//!
//! `GET /medications?limit=&offset=`

use axum::{Json, extract::State};
use medication_persistence::core::MedicationStorage;
use medication_persistence::types::Medication;
use tracing::{error, info};

use crate::error::{LIST_FAILED_MESSAGE, RestError, RestResult};
use crate::extractors::Pagination;
use crate::state::AppState;

/// Handler for listing medications.
///
/// Returns one page of medications ordered by id. Pagination parameters
/// never cause a rejection: bad values fall back to `limit=10`, `offset=0`.
///
/// # Response
///
/// - `200 OK` - JSON array, `[]` when the page is empty
/// - `500 Internal Server Error` - `Failed to fetch medications`
#[utoipa::path(
    get,
    path = "/medications",
    tag = "medications",
    params(
        ("limit" = Option<i64>, Query, description = "Number of records to fetch (default 10)"),
        ("offset" = Option<i64>, Query, description = "Number of records to skip (default 0)")
    ),
    responses(
        (status = 200, description = "Page of medications", body = [Medication]),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Failed to fetch medications")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    pagination: Pagination,
) -> RestResult<Json<Vec<Medication>>>
where
    S: MedicationStorage + 'static,
{
    let medications = state
        .service()
        .list_paginated(pagination.limit(), pagination.offset())
        .await
        .map_err(|e| {
            error!(error = %e, "Error fetching medications");
            RestError::InternalError {
                message: LIST_FAILED_MESSAGE.to_string(),
            }
        })?;

    info!(
        count = medications.len(),
        limit = pagination.limit(),
        offset = pagination.offset(),
        "Fetched medications"
    );
    Ok(Json(medications))
}
