//! Core types for stored medications.

mod medication;

pub use medication::{Medication, MedicationDraft};
