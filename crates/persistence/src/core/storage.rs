//! Core medication storage trait.
//!
//! This module defines the [`MedicationStorage`] trait, the storage port that
//! the domain service depends on. Backends implement it; nothing above the
//! persistence layer names a concrete backend type.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Medication, MedicationDraft};

/// Storage port for medication records.
///
/// Every operation maps to a single statement against the backend, so each
/// call is atomic at the row level and no transaction handling is exposed.
///
/// # Timestamps
///
/// Backends own timestamp assignment: `create` sets `created_at` and
/// `updated_at` to the same instant, and `update` refreshes `updated_at` to
/// an instant strictly later than its previous value.
///
/// # Example
///
/// ```ignore
/// use medication_persistence::core::MedicationStorage;
/// use medication_persistence::types::MedicationDraft;
///
/// async fn example<S: MedicationStorage>(storage: &S) -> StorageResult<()> {
///     let created = storage
///         .create(&MedicationDraft::new("Aspirin", "500mg", "tablet"))
///         .await?;
///
///     let read = storage.get_by_id(created.id).await?;
///     assert!(read.is_some());
///
///     storage.delete(created.id).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait MedicationStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns every medication, ordered by id ascending.
    async fn list_all(&self) -> StorageResult<Vec<Medication>>;

    /// Returns one page of medications ordered by id ascending.
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum number of records to return
    /// * `offset` - Number of leading records to skip
    async fn list_paginated(&self, limit: i64, offset: i64) -> StorageResult<Vec<Medication>>;

    /// Reads a medication by id.
    ///
    /// # Returns
    ///
    /// The stored medication, or `None` if no record has this id.
    async fn get_by_id(&self, id: i64) -> StorageResult<Option<Medication>>;

    /// Inserts a new medication.
    ///
    /// # Returns
    ///
    /// The stored record with its assigned id and timestamps.
    async fn create(&self, draft: &MedicationDraft) -> StorageResult<Medication>;

    /// Overwrites `name`, `dosage` and `form` of the record with this id and
    /// refreshes its `updated_at`.
    ///
    /// The caller guarantees the record exists; updating a missing id is not
    /// an error.
    async fn update(&self, id: i64, medication: &Medication) -> StorageResult<()>;

    /// Permanently removes the record with this id.
    async fn delete(&self, id: i64) -> StorageResult<()>;

    /// Verifies the backend can serve requests.
    async fn health_check(&self) -> StorageResult<()>;

    /// Releases the underlying connection resources.
    ///
    /// Operations issued after `close` fail with a backend error.
    async fn close(&self) -> StorageResult<()>;
}
