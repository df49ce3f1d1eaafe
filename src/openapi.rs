use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::models::{
    AuthResponse, AuthenticationRequest, Difficulty, ErrorResponse, HealthResponse,
    NationalParkCreateRequest, NationalParkDto, NationalParkUpdateRequest, Role, TrailCreateRequest,
    TrailDto, TrailUpdateRequest, UserDto,
};

/// OpenAPI documentation for the Parky API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Parky API",
        version = "1.0.0",
        description = "REST API for national parks, trails, and users with JWT bearer authentication.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "NationalParks", description = "National park CRUD operations"),
        (name = "Trails", description = "Trail CRUD operations"),
        (name = "Users", description = "Authentication and registration")
    ),
    paths(
        crate::routes::health_check,
        crate::handlers::get_national_parks,
        crate::handlers::get_national_park,
        crate::handlers::create_national_park,
        crate::handlers::update_national_park,
        crate::handlers::delete_national_park,
        crate::handlers::get_national_parks_v2,
        crate::handlers::get_trails,
        crate::handlers::get_trail,
        crate::handlers::get_trails_in_national_park,
        crate::handlers::create_trail,
        crate::handlers::update_trail,
        crate::handlers::delete_trail,
        crate::handlers::authenticate,
        crate::handlers::register
    ),
    components(
        schemas(
            AuthenticationRequest,
            NationalParkCreateRequest,
            NationalParkUpdateRequest,
            TrailCreateRequest,
            TrailUpdateRequest,
            NationalParkDto,
            TrailDto,
            UserDto,
            AuthResponse,
            Difficulty,
            Role,
            ErrorResponse,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
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
