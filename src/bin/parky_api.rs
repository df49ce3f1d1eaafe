use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use parky::config::CONFIG;
use parky::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Open the database and apply migrations
    info!("Opening database at {}", CONFIG.database_url);
    let pool = db::init_pool(&CONFIG.database_url).expect("Failed to initialize database");

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting API server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
