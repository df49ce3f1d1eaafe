//! Authentication service for login, registration, token generation,
//! and password utilities.
//!
//! Functions here are synchronous and expect to run inside `web::block`
//! with a pooled connection, like the repositories they call.

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use diesel::SqliteConnection;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use log::debug;

use crate::config::CONFIG;
use crate::constants::{ERR_INVALID_CREDENTIALS, ERR_USERNAME_EXISTS, ROLE_ADMIN};
use crate::errors::ApiError;
use crate::models::{Claims, NewUser, User};
use crate::repositories::UserRepository;
use crate::utils::mask_username;

/// Authenticate a user and return the row together with a fresh JWT.
pub fn authenticate(
    conn: &mut SqliteConnection,
    username: &str,
    password: &str,
) -> Result<(User, String), ApiError> {
    let user = UserRepository::find_by_username(conn, username)?
        .ok_or_else(|| ApiError::BadRequest(ERR_INVALID_CREDENTIALS.to_string()))?;

    if !verify_password(password, &user.password_hash)? {
        return Err(ApiError::BadRequest(ERR_INVALID_CREDENTIALS.to_string()));
    }

    let token = generate_token(&user)?;
    debug!("Issued token for user {}", mask_username(&user.username));

    Ok((user, token))
}

/// Register a new user. Every registration gets the Admin role, matching
/// the behavior the web tier depends on.
pub fn register(
    conn: &mut SqliteConnection,
    username: &str,
    password: &str,
) -> Result<User, ApiError> {
    if !UserRepository::is_unique(conn, username)? {
        return Err(ApiError::BadRequest(ERR_USERNAME_EXISTS.to_string()));
    }

    let user = UserRepository::insert(
        conn,
        NewUser {
            username: username.to_string(),
            password_hash: hash_password(password)?,
            role: ROLE_ADMIN.to_string(),
        },
    )?;

    Ok(user)
}

/// Hash a password using bcrypt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    Ok(verify(password, hash)?)
}

/// Generate a JWT token for a user. Expiry is short-lived, configured in
/// minutes (30 by default).
pub fn generate_token(user: &User) -> Result<String, ApiError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + (CONFIG.jwt_expiration_minutes as usize * 60);

    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        role: user.role().to_string(),
        exp,
        iat: now,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
    )?;

    Ok(token)
}

/// Decode and validate a JWT token.
pub fn decode_token(token: &str) -> Result<Claims, ApiError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            username: "ranger_rick".to_string(),
            password_hash: String::new(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn token_round_trips_through_the_configured_secret() {
        let token = generate_token(&sample_user()).unwrap();
        assert!(!token.is_empty());

        let claims = decode_token(&token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.username, "ranger_rick");
        assert!(claims.is_admin());
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(decode_token("not-a-jwt").is_err());
    }

    #[test]
    fn password_hash_verifies() {
        let hashed = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hashed).unwrap());
        assert!(!verify_password("hunter3", &hashed).unwrap());
    }
}
