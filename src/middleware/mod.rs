pub mod auth_helpers;
pub mod auth_middleware;
pub mod request_ext;

pub use auth_helpers::{require_admin, require_auth};
pub use auth_middleware::AuthMiddleware;
pub use request_ext::RequestExt;
