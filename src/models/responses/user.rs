//! User DTOs returned on the wire. The password hash never leaves the
//! database layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Role, User};

/// User data returned in API responses (without sensitive fields)
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "ranger_rick")]
    pub username: String,
    pub role: Role,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let role = user.role();
        Self {
            id: user.id,
            username: user.username,
            role,
        }
    }
}

/// Response for successful authentication
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "ranger_rick")]
    pub username: String,
    pub role: Role,
    /// JWT bearer token for subsequent calls
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}
