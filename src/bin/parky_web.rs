use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{cookie::Key, middleware::Logger, web, App, HttpServer};
use log::info;

use parky::config::CONFIG;
use parky::web::{routes, ApiClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let client = web::Data::new(ApiClient::new(CONFIG.api_base_url.clone()));
    let session_key = Key::derive_from(CONFIG.session_secret.as_bytes());

    let server_addr = format!("{}:{}", CONFIG.web_host, CONFIG.web_port);
    info!("Starting web server at http://{}", server_addr);
    info!("Consuming API at {}", CONFIG.api_base_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                session_key.clone(),
            ))
            .app_data(client.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
