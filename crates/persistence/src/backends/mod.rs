//! Database backend implementations.
//!
//! This module contains implementations of [`MedicationStorage`](crate::core::MedicationStorage).
//! The relational backend is gated behind a feature flag.
//!
//! # Available Backends
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | PostgreSQL | `postgres` | Pooled relational storage, the production backend |
//! | In-memory | always | Process-local map for tests and local experiments |
//!
//! # Example
//!
//! ```
//! use medication_persistence::backends::memory::InMemoryBackend;
//!
//! let backend = InMemoryBackend::new();
//! assert!(backend.is_empty());
//! ```

pub mod memory;

#[cfg(feature = "postgres")]
pub mod postgres;
