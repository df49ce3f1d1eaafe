//! Versioned route table for the REST API.
//!
//! `/api/v1` carries the full surface; `/api/v2` exists as the
//! versioning showcase and only reshapes the parks listing.

use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::constants::MSG_SERVER_RUNNING;
use crate::handlers;
use crate::middleware::AuthMiddleware;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(AuthMiddleware)
            // Health check
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/v1")
                    .service(
                        web::scope("/nationalparks")
                            .route("", web::get().to(handlers::get_national_parks))
                            .route("", web::post().to(handlers::create_national_park))
                            .route("/{park_id}", web::get().to(handlers::get_national_park))
                            .route("/{park_id}", web::patch().to(handlers::update_national_park))
                            .route(
                                "/{park_id}",
                                web::delete().to(handlers::delete_national_park),
                            ),
                    )
                    .service(
                        web::scope("/trails")
                            .route("", web::get().to(handlers::get_trails))
                            .route("", web::post().to(handlers::create_trail))
                            // Must be registered before /{trail_id} to avoid conflict
                            .route(
                                "/nationalpark/{park_id}",
                                web::get().to(handlers::get_trails_in_national_park),
                            )
                            .route("/{trail_id}", web::get().to(handlers::get_trail))
                            .route("/{trail_id}", web::patch().to(handlers::update_trail))
                            .route("/{trail_id}", web::delete().to(handlers::delete_trail)),
                    )
                    .service(
                        web::scope("/users")
                            .route("/authenticate", web::post().to(handlers::authenticate))
                            .route("", web::post().to(handlers::register)),
                    ),
            )
            .service(
                web::scope("/v2")
                    .route("/nationalparks", web::get().to(handlers::get_national_parks_v2)),
            ),
    );
    cfg.route("/api-docs/openapi.json", web::get().to(openapi_json));
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
