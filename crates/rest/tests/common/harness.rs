//! REST API test harness.
//!
//! Provides infrastructure for testing the REST API endpoints against the
//! in-memory backend.

use std::sync::Arc;

use axum_test::{TestResponse, TestServer};
use medication_persistence::backends::memory::InMemoryBackend;
use medication_persistence::core::MedicationStorage;
use medication_persistence::types::{Medication, MedicationDraft};
use medication_rest::{ReleaseTarget, ServerConfig, create_app_with_shared_storage};
use serde_json::Value;

/// Secret the harness signs bearer tokens with.
pub const TEST_SECRET: &str = "test-secret";

/// Test harness for REST API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_read() {
///     let harness = RestTestHarness::new();
///     let created = harness.seed("Aspirin", "500mg", "tablet").await;
///
///     let response = harness.get(&format!("/medications/{}", created.id)).await;
///     assert_eq!(response.status_code(), 200);
/// }
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend shared with the server.
    pub backend: Arc<InMemoryBackend>,

    /// Server configuration.
    pub config: ServerConfig,

    /// Bearer token attached to every request, if any.
    token: Option<String>,
}

impl RestTestHarness {
    /// Creates a development harness: open routes, Swagger UI mounted.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// Creates a production harness: medication routes behind the gate.
    pub fn production() -> Self {
        Self::with_config(ServerConfig {
            release_target: ReleaseTarget::Production,
            ..ServerConfig::for_testing()
        })
    }

    /// Creates a harness with the given configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        let backend = Arc::new(InMemoryBackend::new());
        let app = create_app_with_shared_storage(Arc::clone(&backend), config.clone());
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            backend,
            config,
            token: None,
        }
    }

    /// Attaches `Authorization: Bearer <token>` to subsequent requests.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Seeds a medication directly through storage.
    pub async fn seed(&self, name: &str, dosage: &str, form: &str) -> Medication {
        self.backend
            .create(&MedicationDraft::new(name, dosage, form))
            .await
            .expect("Failed to seed medication")
    }

    /// Reads a medication directly from storage.
    pub async fn stored(&self, id: i64) -> Option<Medication> {
        self.backend
            .get_by_id(id)
            .await
            .expect("Failed to read medication")
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = self.server.get(path);
        match &self.token {
            Some(token) => request.authorization_bearer(token).await,
            None => request.await,
        }
    }

    /// Makes a GET request with pagination query parameters.
    pub async fn list(&self, limit: &str, offset: &str) -> TestResponse {
        let request = self
            .server
            .get("/medications")
            .add_query_param("limit", limit)
            .add_query_param("offset", offset);
        match &self.token {
            Some(token) => request.authorization_bearer(token).await,
            None => request.await,
        }
    }

    /// Makes a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        let request = self.server.post(path).json(&body);
        match &self.token {
            Some(token) => request.authorization_bearer(token).await,
            None => request.await,
        }
    }

    /// Makes a POST request with a raw text body.
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = self.server.post(path).text(body);
        match &self.token {
            Some(token) => request.authorization_bearer(token).await,
            None => request.await,
        }
    }

    /// Makes a PUT request with JSON body.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        let request = self.server.put(path).json(&body);
        match &self.token {
            Some(token) => request.authorization_bearer(token).await,
            None => request.await,
        }
    }

    /// Makes a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        let request = self.server.delete(path);
        match &self.token {
            Some(token) => request.authorization_bearer(token).await,
            None => request.await,
        }
    }
}

impl Default for RestTestHarness {
    fn default() -> Self {
        Self::new()
    }
}
