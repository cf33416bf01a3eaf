//! # medication-rest - Medication RESTful API
//!
//! This crate provides the HTTP layer of the medication service: CRUD
//! endpoints over a single medication resource, an optional bearer-token
//! gate, health probes and an OpenAPI description.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use medication_persistence::backends::postgres::PostgresBackend;
//! use medication_rest::{create_app_with_config, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::parse();
//!
//!     let backend = PostgresBackend::new(config.postgres_config()).await?;
//!     backend.init_schema().await?;
//!
//!     let app = create_app_with_config(backend, config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | list | GET | `/medications?limit=&offset=` |
//! | create | POST | `/medications` |
//! | read | GET | `/medications/{id}` |
//! | update | PUT | `/medications/{id}` |
//! | delete | DELETE | `/medications/{id}` |
//! | health | GET | `/health`, `/_liveness`, `/_readiness` |
//! | docs (DEV only) | GET | `/swagger`, `/api-docs/openapi.json` |
//!
//! ## Authentication
//!
//! When `TARGET_RELEASE=PROD` every `/medications` route requires an
//! `Authorization: Bearer <jwt>` header carrying an HS256 token signed with
//! `JWT_SECRET`. Otherwise the routes are open and the Swagger UI is served.
//!
//! ## Architecture
//!
//! - [`error`] - Error types and plain-text error responses
//! - [`config`] - Server configuration
//! - [`state`] - Application state (domain service, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Bearer-token authentication
//! - [`extractors`] - Pagination, id and payload extractors
//! - [`routing`] - Route configuration
//! - [`openapi`] - OpenAPI document

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::{ReleaseTarget, ServerConfig};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use medication_persistence::core::MedicationStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with custom configuration.
///
/// # Arguments
///
/// * `storage` - The storage backend to use
/// * `config` - Server configuration
///
/// # Example
///
/// ```rust
/// use medication_persistence::backends::memory::InMemoryBackend;
/// use medication_rest::{create_app_with_config, ServerConfig};
///
/// let config = ServerConfig {
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(InMemoryBackend::new(), config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: MedicationStorage + 'static,
{
    create_app_with_shared_storage(Arc::new(storage), config)
}

/// Creates the Axum application over storage the caller keeps a handle to.
///
/// The server binary uses this to close the storage after shutdown.
pub fn create_app_with_shared_storage<S>(storage: Arc<S>, config: ServerConfig) -> Router
where
    S: MedicationStorage + 'static,
{
    info!(
        backend = storage.backend_name(),
        release_target = %config.release_target,
        "Creating REST API server"
    );

    let state = AppState::new(storage, config.clone());

    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup, by the binary.
/// Library code only emits events and never installs a subscriber.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "medication_server={level},medication_rest={level},medication_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
