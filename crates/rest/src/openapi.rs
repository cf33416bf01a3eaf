//! OpenAPI document for the medication API.

use medication_persistence::types::{Medication, MedicationDraft};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::handlers::{self, MessageResponse};

/// OpenAPI description of the five medication operations.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Medication API",
        version = "1.0",
        description = "RESTful API for managing medications."
    ),
    paths(
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::read::read_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler,
    ),
    components(schemas(Medication, MedicationDraft, MessageResponse)),
    modifiers(&BearerAuth),
    tags((name = "medications", description = "Medication CRUD operations"))
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` HTTP scheme referenced by the operations.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
