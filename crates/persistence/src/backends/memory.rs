//! In-memory backend implementation.
//!
//! A process-local [`MedicationStorage`] used to exercise the domain service
//! and the REST layer without a database. Records live in a `BTreeMap`
//! keyed by id, so iteration order is id order.

use std::collections::BTreeMap;
use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

use crate::core::MedicationStorage;
use crate::error::{BackendError, StorageError, StorageResult};
use crate::types::{Medication, MedicationDraft};

const BACKEND_NAME: &str = "memory";

/// In-memory backend for medication storage.
#[derive(Default)]
pub struct InMemoryBackend {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    records: BTreeMap<i64, Medication>,
    last_id: i64,
    closed: bool,
    unavailable: bool,
}

impl Debug for InMemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("InMemoryBackend")
            .field("records", &inner.records.len())
            .field("closed", &inner.closed)
            .finish_non_exhaustive()
    }
}

impl InMemoryBackend {
    /// Creates an empty backend. The first created record gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Simulates a lost database connection.
    ///
    /// While unavailable every operation fails with
    /// [`BackendError::Unavailable`], which lets callers test their
    /// storage-failure paths.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.write().unavailable = unavailable;
    }

    fn check_open(inner: &Inner) -> StorageResult<()> {
        if inner.closed {
            return Err(StorageError::Backend(BackendError::Closed {
                backend_name: BACKEND_NAME.to_string(),
            }));
        }
        if inner.unavailable {
            return Err(StorageError::Backend(BackendError::Unavailable {
                backend_name: BACKEND_NAME.to_string(),
                message: "connection lost".to_string(),
            }));
        }
        Ok(())
    }
}

/// Returns a timestamp strictly later than `previous`.
fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

#[async_trait]
impl MedicationStorage for InMemoryBackend {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn list_all(&self) -> StorageResult<Vec<Medication>> {
        let inner = self.inner.read();
        Self::check_open(&inner)?;
        Ok(inner.records.values().cloned().collect())
    }

    async fn list_paginated(&self, limit: i64, offset: i64) -> StorageResult<Vec<Medication>> {
        let inner = self.inner.read();
        Self::check_open(&inner)?;

        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        let offset = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);

        Ok(inner
            .records
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> StorageResult<Option<Medication>> {
        let inner = self.inner.read();
        Self::check_open(&inner)?;
        Ok(inner.records.get(&id).cloned())
    }

    async fn create(&self, draft: &MedicationDraft) -> StorageResult<Medication> {
        let mut inner = self.inner.write();
        Self::check_open(&inner)?;

        inner.last_id += 1;
        let now = Utc::now();
        let medication = Medication {
            id: inner.last_id,
            name: draft.name.clone(),
            dosage: draft.dosage.clone(),
            form: draft.form.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.records.insert(medication.id, medication.clone());

        tracing::debug!(id = medication.id, "Inserted medication");
        Ok(medication)
    }

    async fn update(&self, id: i64, medication: &Medication) -> StorageResult<()> {
        let mut inner = self.inner.write();
        Self::check_open(&inner)?;

        if let Some(stored) = inner.records.get_mut(&id) {
            stored.name = medication.name.clone();
            stored.dosage = medication.dosage.clone();
            stored.form = medication.form.clone();
            stored.updated_at = advance(stored.updated_at);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let mut inner = self.inner.write();
        Self::check_open(&inner)?;
        inner.records.remove(&id);
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<()> {
        let inner = self.inner.read();
        Self::check_open(&inner)
    }

    async fn close(&self) -> StorageResult<()> {
        self.inner.write().closed = true;
        Ok(())
    }
}
