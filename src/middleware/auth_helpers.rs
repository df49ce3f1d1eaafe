//! Authentication and authorization helper functions.
//!
//! These helpers reduce boilerplate in handlers by providing common
//! patterns for extracting claims from authenticated requests and
//! requiring the Admin role.

use actix_web::HttpRequest;
use log::warn;

use crate::constants::{ERR_ADMIN_ONLY, ERR_AUTH_REQUIRED};
use crate::errors::ApiError;
use crate::models::Claims;

use super::RequestExt;

/// Extract claims from request or return Unauthorized error.
///
/// Use this at the start of any handler that requires authentication.
pub fn require_auth(req: &HttpRequest) -> Result<Claims, ApiError> {
    req.get_claims().ok_or_else(|| {
        warn!("Unauthenticated request to protected route {}", req.path());
        ApiError::Unauthorized(ERR_AUTH_REQUIRED.to_string())
    })
}

/// Require the Admin role or return Unauthorized error.
///
/// Call this after `require_auth` for admin-only routes.
pub fn require_admin(claims: &Claims) -> Result<(), ApiError> {
    if !claims.is_admin() {
        warn!("Non-admin user {} attempted admin action", claims.sub);
        return Err(ApiError::Unauthorized(ERR_ADMIN_ONLY.to_string()));
    }
    Ok(())
}
