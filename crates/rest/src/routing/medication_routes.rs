//! Medication route configuration.

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::get,
};
use medication_persistence::core::MedicationStorage;
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::middleware::auth::{JwtAuth, require_bearer_token};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Path of the Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/swagger";

/// Path of the OpenAPI document served alongside the Swagger UI.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Creates the medication resource routes, without state.
///
/// - `GET /medications` - List (paginated)
/// - `POST /medications` - Create
/// - `GET /medications/{id}` - Read
/// - `PUT /medications/{id}` - Update
/// - `DELETE /medications/{id}` - Delete
///
/// The collection routes also answer on `/medications/`.
pub fn medication_routes<S>() -> Router<AppState<S>>
where
    S: MedicationStorage + 'static,
{
    let collection = get(handlers::list_handler::<S>).post(handlers::create_handler::<S>);

    Router::new()
        .route("/medications", collection.clone())
        .route("/medications/", collection)
        .route(
            "/medications/{id}",
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
}

/// Creates all routes of the API.
///
/// The bearer-token gate wraps only the medication routes and is attached
/// only when the configured release target is production. The Swagger UI
/// is mounted only in development. Health probes are always open.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: MedicationStorage + 'static,
{
    let config = state.config();

    let mut medications = medication_routes::<S>();
    if config.auth_enabled() {
        let auth = Arc::new(JwtAuth::new(&config.jwt_secret));
        medications = medications.route_layer(from_fn_with_state(auth, require_bearer_token));
        info!("Authentication middleware enabled for {}", config.release_target);
    } else {
        warn!(
            "Authentication middleware disabled for {} environment",
            config.release_target
        );
    }

    let docs_enabled = config.docs_enabled();

    let router = Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        .merge(medications)
        .with_state(state);

    if docs_enabled {
        info!(path = SWAGGER_UI_PATH, "Serving Swagger UI");
        router.merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
    } else {
        router
    }
}
