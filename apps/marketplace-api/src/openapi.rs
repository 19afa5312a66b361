//! OpenAPI documentation configuration

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Registers the bearer scheme referenced by the message routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token returned by POST /api/login"))
                    .build(),
            ),
        );
    }
}

/// Probe endpoints served next to the domain routes.
#[derive(OpenApi)]
#[openapi(
    paths(crate::api::health::test, crate::api::health::ready),
    tags((name = "Health", description = "Liveness and readiness probes"))
)]
struct HealthDoc;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Marketplace API",
        version = "0.1.0",
        description = "Buyer/seller marketplace: accounts, product listings with comments, messages and reviews, uploads and checkout",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_users::handlers::ApiDoc),
        (path = "/api", api = domain_products::handlers::ApiDoc),
        (path = "/api", api = domain_uploads::handlers::ApiDoc),
        (path = "/api", api = domain_checkout::handlers::ApiDoc),
        (path = "/api", api = HealthDoc)
    )
)]
pub struct ApiDoc;
