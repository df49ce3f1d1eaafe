//! Server-rendered web tier.
//!
//! Consumes the REST API over HTTP and keeps the JWT in a cookie
//! session, so the browser never sees the token directly.

pub mod api_client;
pub mod handlers;
pub mod pages;
pub mod routes;

pub use api_client::ApiClient;

// API paths the web tier talks to
pub const NATIONAL_PARK_API_PATH: &str = "/api/v1/nationalparks";
pub const TRAIL_API_PATH: &str = "/api/v1/trails";
pub const USER_API_PATH: &str = "/api/v1/users";

// Session keys
pub const SESSION_TOKEN: &str = "JWToken";
pub const SESSION_USERNAME: &str = "Username";
pub const SESSION_ROLE: &str = "Role";
