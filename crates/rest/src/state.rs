//! Application state for the medication REST API.
//!
//! Handlers share the domain service and the server configuration. Neither
//! holds per-request mutable state.

use std::sync::Arc;

use medication_persistence::core::MedicationStorage;
use medication_persistence::service::MedicationService;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`MedicationStorage`])
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use medication_persistence::backends::memory::InMemoryBackend;
/// use medication_rest::{AppState, ServerConfig};
///
/// let state = AppState::new(Arc::new(InMemoryBackend::new()), ServerConfig::default());
/// assert_eq!(state.backend_name(), "memory");
/// ```
pub struct AppState<S> {
    /// The domain service over the storage backend.
    service: MedicationService<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: MedicationStorage> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            service: MedicationService::new(storage),
            config: Arc::new(config),
        }
    }

    /// Returns the domain service.
    pub fn service(&self) -> &MedicationService<S> {
        &self.service
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        self.service.storage()
    }

    /// Returns the storage backend's name.
    pub fn backend_name(&self) -> &'static str {
        self.storage().backend_name()
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
