//! Route table for the web tier.

use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/login", web::get().to(handlers::login_form))
        .route("/login", web::post().to(handlers::login))
        .route("/register", web::get().to(handlers::register_form))
        .route("/register", web::post().to(handlers::register))
        .route("/logout", web::get().to(handlers::logout))
        .route("/access-denied", web::get().to(handlers::access_denied))
        .default_service(web::route().to(handlers::not_found));
}
