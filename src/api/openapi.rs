//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SIC Code API",
        version = "0.1.0",
        description = "Role-gated lookup and autocomplete over SIC industry codes"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        api::health::health,
        api::sic_codes::list_sic_codes,
    ),
    components(
        schemas(
            error::ErrorBody,
            api::health::HealthResponse,
            models::ReferenceItem,
            models::MatchField,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "SIC Codes", description = "SIC industry code lookup")
    ),
    modifiers(&GatewayIdentityAddon)
)]
pub struct ApiDoc;

/// Document the gateway identity headers as security schemes.
struct GatewayIdentityAddon;

impl utoipa::Modify for GatewayIdentityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use crate::config::{USER_EMAIL_HEADER, USER_ROLES_HEADER};
        use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};

        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "user_email",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(USER_EMAIL_HEADER))),
            );
            components.add_security_scheme(
                "user_roles",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(USER_ROLES_HEADER))),
            );
        }
    }
}
