//! PostgreSQL schema definition.

use crate::error::StorageResult;

use super::backend::internal_error;

/// DDL for the medications table. Idempotent.
pub(crate) const CREATE_MEDICATIONS_TABLE: &str = "CREATE TABLE IF NOT EXISTS medications (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    dosage TEXT NOT NULL DEFAULT '',
    form TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

/// Creates the medications table if it does not exist yet.
///
/// Safe to call on every startup; existing rows are left alone.
pub(crate) async fn initialize_schema(client: &deadpool_postgres::Client) -> StorageResult<()> {
    client
        .execute(CREATE_MEDICATIONS_TABLE, &[])
        .await
        .map_err(|e| internal_error("Failed to create medications table", e))?;

    tracing::info!("Medication schema ensured");
    Ok(())
}
