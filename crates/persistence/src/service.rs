//! Domain service for medications.
//!
//! [`MedicationService`] sits between the HTTP layer and the storage port. It
//! is the only place that enforces business rules: a medication must have a
//! non-empty name, and updates and deletes require the record to exist.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::core::MedicationStorage;
use crate::error::{ResourceError, StorageResult, ValidationError};
use crate::types::{Medication, MedicationDraft};

/// Business logic over a [`MedicationStorage`] backend.
pub struct MedicationService<S> {
    storage: Arc<S>,
}

impl<S> Clone for MedicationService<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S> std::fmt::Debug for MedicationService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MedicationService").finish_non_exhaustive()
    }
}

impl<S: MedicationStorage> MedicationService<S> {
    /// Creates a service over the given storage.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Returns the underlying storage.
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    /// Creates a medication after checking its name.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: &MedicationDraft) -> StorageResult<Medication> {
        if draft.has_empty_name() {
            return Err(ValidationError::EmptyName.into());
        }
        let created = self.storage.create(draft).await?;
        debug!(id = created.id, "Created medication");
        Ok(created)
    }

    /// Reads a medication, turning an absent record into a not-found error.
    pub async fn get_by_id(&self, id: i64) -> StorageResult<Medication> {
        self.storage
            .get_by_id(id)
            .await?
            .ok_or_else(|| ResourceError::NotFound { id }.into())
    }

    /// Overwrites `name`, `dosage` and `form` of an existing medication.
    ///
    /// The payload's id and timestamps are never consulted.
    #[instrument(skip(self, draft))]
    pub async fn update(&self, id: i64, draft: MedicationDraft) -> StorageResult<()> {
        let mut existing = self.get_by_id(id).await?;
        existing.apply(draft);

        if existing.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        self.storage.update(id, &existing).await?;
        debug!(id, "Updated medication");
        Ok(())
    }

    /// Deletes an existing medication.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> StorageResult<()> {
        self.get_by_id(id).await?;
        self.storage.delete(id).await?;
        debug!(id, "Deleted medication");
        Ok(())
    }

    /// Returns one page of medications in id order.
    pub async fn list_paginated(&self, limit: i64, offset: i64) -> StorageResult<Vec<Medication>> {
        self.storage.list_paginated(limit, offset).await
    }

    /// Returns every medication in id order.
    pub async fn list_all(&self) -> StorageResult<Vec<Medication>> {
        self.storage.list_all().await
    }
}
