//! JWT Claims model.

use serde::{Deserialize, Serialize};

use crate::constants::ROLE_ADMIN;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub role: String, // user role (admin/user)
    pub exp: usize,   // expiration timestamp
    pub iat: usize,   // issued at timestamp
}

impl Claims {
    /// Check if the claims belong to an admin user
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_claims_are_detected() {
        let claims = Claims {
            sub: "1".to_string(),
            username: "ranger".to_string(),
            role: "admin".to_string(),
            exp: 0,
            iat: 0,
        };
        assert!(claims.is_admin());
    }

    #[test]
    fn regular_claims_are_not_admin() {
        let claims = Claims {
            sub: "2".to_string(),
            username: "hiker".to_string(),
            role: "user".to_string(),
            exp: 0,
            iat: 0,
        };
        assert!(!claims.is_admin());
    }
}
