//! MedicationStorage implementation for PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_postgres::Row;

use crate::core::MedicationStorage;
use crate::error::{BackendError, StorageError, StorageResult};
use crate::types::{Medication, MedicationDraft};

use super::PostgresBackend;
use super::backend::{BACKEND_NAME, internal_error};

const COLUMNS: &str = "id, name, dosage, form, created_at, updated_at";

fn row_to_medication(row: &Row) -> Medication {
    Medication {
        id: row.get(0),
        name: row.get(1),
        dosage: row.get(2),
        form: row.get(3),
        created_at: row.get::<_, DateTime<Utc>>(4),
        updated_at: row.get::<_, DateTime<Utc>>(5),
    }
}

#[async_trait]
impl MedicationStorage for PostgresBackend {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn list_all(&self) -> StorageResult<Vec<Medication>> {
        let client = self.get_client().await?;
        let sql = format!("SELECT {COLUMNS} FROM medications ORDER BY id");

        let rows = client
            .query(sql.as_str(), &[])
            .await
            .map_err(|e| internal_error("Failed to list medications", e))?;

        Ok(rows.iter().map(row_to_medication).collect())
    }

    async fn list_paginated(&self, limit: i64, offset: i64) -> StorageResult<Vec<Medication>> {
        let client = self.get_client().await?;
        let sql = format!("SELECT {COLUMNS} FROM medications ORDER BY id LIMIT $1 OFFSET $2");

        let rows = client
            .query(sql.as_str(), &[&limit, &offset])
            .await
            .map_err(|e| internal_error("Failed to list medications", e))?;

        tracing::trace!(limit, offset, count = rows.len(), "Listed medication page");
        Ok(rows.iter().map(row_to_medication).collect())
    }

    async fn get_by_id(&self, id: i64) -> StorageResult<Option<Medication>> {
        let client = self.get_client().await?;
        let sql = format!("SELECT {COLUMNS} FROM medications WHERE id = $1");

        let row = client
            .query_opt(sql.as_str(), &[&id])
            .await
            .map_err(|e| internal_error("Failed to read medication", e))?;

        Ok(row.as_ref().map(row_to_medication))
    }

    async fn create(&self, draft: &MedicationDraft) -> StorageResult<Medication> {
        let client = self.get_client().await?;
        // Both timestamps default to NOW(), which is fixed for the statement,
        // so they come back equal.
        let sql = format!(
            "INSERT INTO medications (name, dosage, form) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );

        let row = client
            .query_one(sql.as_str(), &[&draft.name, &draft.dosage, &draft.form])
            .await
            .map_err(|e| internal_error("Failed to insert medication", e))?;

        let medication = row_to_medication(&row);
        tracing::debug!(id = medication.id, "Inserted medication");
        Ok(medication)
    }

    async fn update(&self, id: i64, medication: &Medication) -> StorageResult<()> {
        let client = self.get_client().await?;

        let updated = client
            .execute(
                "UPDATE medications
                 SET name = $1, dosage = $2, form = $3,
                     updated_at = GREATEST(NOW(), updated_at + interval '1 microsecond')
                 WHERE id = $4",
                &[&medication.name, &medication.dosage, &medication.form, &id],
            )
            .await
            .map_err(|e| internal_error("Failed to update medication", e))?;

        tracing::debug!(id, rows = updated, "Updated medication");
        Ok(())
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let client = self.get_client().await?;

        let deleted = client
            .execute("DELETE FROM medications WHERE id = $1", &[&id])
            .await
            .map_err(|e| internal_error("Failed to delete medication", e))?;

        tracing::debug!(id, rows = deleted, "Deleted medication");
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<()> {
        let client = self.get_client().await.map_err(|e| match e {
            StorageError::Backend(BackendError::Closed { .. }) => e,
            _ => StorageError::Backend(BackendError::Unavailable {
                backend_name: BACKEND_NAME.to_string(),
                message: "Failed to get connection".to_string(),
            }),
        })?;

        client
            .query_one("SELECT 1", &[])
            .await
            .map_err(|e| internal_error("Health check failed", e))?;
        Ok(())
    }

    async fn close(&self) -> StorageResult<()> {
        self.close_pool();
        tracing::info!("PostgreSQL pool closed");
        Ok(())
    }
}
