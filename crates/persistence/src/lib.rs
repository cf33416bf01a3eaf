//! Medication Service Persistence Layer
//!
//! This crate provides the storage port, its backends and the domain service
//! for the medication service.
//!
//! # Backend Features
//!
//! ```toml
//! [dependencies]
//! medication-persistence = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! Available backend features:
//! - `postgres` (default) - PostgreSQL via deadpool-postgres
//!
//! The in-memory backend is always available. The `openapi` feature derives
//! `utoipa::ToSchema` for the record types.
//!
//! # Architecture
//!
//! - [`types`] - The medication record and its client-writable draft
//! - [`error`] - Error types for all operations
//! - [`core`] - The [`MedicationStorage`](core::MedicationStorage) storage port
//! - [`backends`] - Backend implementations (PostgreSQL, in-memory)
//! - [`service`] - The [`MedicationService`](service::MedicationService) enforcing business rules
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use medication_persistence::backends::memory::InMemoryBackend;
//! use medication_persistence::service::MedicationService;
//! use medication_persistence::types::MedicationDraft;
//!
//! # tokio_test::block_on(async {
//! let service = MedicationService::new(Arc::new(InMemoryBackend::new()));
//!
//! let created = service
//!     .create(&MedicationDraft::new("Aspirin", "500mg", "tablet"))
//!     .await
//!     .unwrap();
//! assert_eq!(created.id, 1);
//! assert_eq!(created.created_at, created.updated_at);
//!
//! // Empty names are rejected before reaching storage.
//! assert!(service.create(&MedicationDraft::default()).await.is_err());
//! # });
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod service;
pub mod types;

pub use error::{StorageError, StorageResult};
