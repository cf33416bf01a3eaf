//! Medication record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A persisted medication record.
///
/// `id`, `created_at` and `updated_at` are assigned by the storage backend;
/// only `name`, `dosage` and `form` are client-writable (see [`MedicationDraft`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Medication {
    /// Storage-assigned identifier, unique and immutable.
    pub id: i64,
    /// Medication name. Never empty for a stored record.
    pub name: String,
    /// Free-form dosage, e.g. "500mg".
    pub dosage: String,
    /// Free-form form, e.g. "tablet" or "capsule".
    pub form: String,
    /// When the record was inserted.
    pub created_at: DateTime<Utc>,
    /// When the record was last written. Never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl Medication {
    /// Overwrites the client-writable fields with the values from `draft`.
    ///
    /// `id` and both timestamps are left untouched.
    pub fn apply(&mut self, draft: MedicationDraft) {
        self.name = draft.name;
        self.dosage = draft.dosage;
        self.form = draft.form;
    }
}

/// The client-writable part of a medication.
///
/// Request bodies are decoded into this type. Omitted or `null` fields
/// default to the empty string; any other fields (`id`, timestamps) are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MedicationDraft {
    /// Medication name; required to be non-empty by the domain service.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Free-form dosage.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dosage: String,
    /// Free-form form.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub form: String,
}

impl MedicationDraft {
    /// Creates a draft from its three fields.
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        form: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            form: form.into(),
        }
    }

    /// Returns true if the name is empty or whitespace only.
    pub fn has_empty_name(&self) -> bool {
        self.name.trim().is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
