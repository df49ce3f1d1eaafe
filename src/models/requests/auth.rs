//! Authentication request models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Credentials for both `authenticate` and `register`.
///
/// Serialize is derived too because the web tier posts this same shape
/// at the API.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AuthenticationRequest {
    /// Unique username (1-50 characters)
    #[validate(length(min = 1, max = 50, message = "Username must be between 1 and 50 characters"))]
    #[schema(example = "ranger_rick")]
    pub username: String,
    /// User's password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "securePassword123")]
    pub password: String,
}
