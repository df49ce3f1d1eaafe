use std::env;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration_minutes: i64,
    pub web_host: String,
    pub web_port: u16,
    pub api_base_url: String,
    pub session_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "parky.db".to_string()),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-super-secret-jwt-key-change-in-production".to_string()),
            jwt_expiration_minutes: env::var("JWT_EXPIRATION_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("JWT_EXPIRATION_MINUTES must be a valid number"),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .expect("WEB_PORT must be a valid number"),
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
            // Cookie signing key material, must be at least 64 bytes
            session_secret: env::var("SESSION_SECRET").unwrap_or_else(|_| {
                "parky-session-secret-change-in-production-0123456789abcdef0123456789abcdef"
                    .to_string()
            }),
        }
    }
}
