//! Core storage traits and abstractions.
//!
//! - [`MedicationStorage`] - the storage port implemented by every backend

pub mod storage;

pub use storage::MedicationStorage;
