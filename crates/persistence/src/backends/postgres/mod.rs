//! PostgreSQL backend implementation.
//!
//! This module provides the relational implementation of
//! [`MedicationStorage`](crate::core::MedicationStorage). It uses connection
//! pooling via deadpool-postgres and native TIMESTAMPTZ for timestamps. Every
//! operation is a single parameterized statement.
//!
//! # Example
//!
//! ```no_run
//! use medication_persistence::backends::postgres::{PostgresBackend, PostgresConfig};
//! use medication_persistence::core::MedicationStorage;
//! use medication_persistence::types::MedicationDraft;
//!
//! # async fn main_example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PostgresConfig {
//!     password: Some("postgres".to_string()),
//!     ..Default::default()
//! };
//! let backend = PostgresBackend::new(config).await?;
//! backend.init_schema().await?;
//!
//! let created = backend
//!     .create(&MedicationDraft::new("Aspirin", "500mg", "tablet"))
//!     .await?;
//! assert_eq!(created.created_at, created.updated_at);
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS medications (
//!     id BIGSERIAL PRIMARY KEY,
//!     name TEXT NOT NULL,
//!     dosage TEXT NOT NULL DEFAULT '',
//!     form TEXT NOT NULL DEFAULT '',
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
//!     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

mod backend;
pub(crate) mod schema;
mod storage;

pub use backend::{PostgresBackend, PostgresConfig, PostgresSslMode};
