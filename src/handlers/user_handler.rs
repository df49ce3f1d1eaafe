//! User handlers for authentication and registration.

use actix_web::{web, HttpResponse};
use log::info;
use validator::Validate;

use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::{AuthResponse, AuthenticationRequest, User, UserDto};
use crate::services::auth_service;
use crate::utils::mask_username;
use crate::validators::validation_errors_to_api_error;

/// Authenticate a user and get a JWT token
#[utoipa::path(
    post,
    path = "/api/v1/users/authenticate",
    tag = "Users",
    request_body = AuthenticationRequest,
    responses(
        (status = 200, description = "Authentication successful", body = AuthResponse),
        (status = 400, description = "Wrong credentials or validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn authenticate(
    pool: web::Data<DbPool>,
    body: web::Json<AuthenticationRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;
    let body = body.into_inner();

    let (user, token) = web::block(move || -> Result<(User, String), ApiError> {
        let mut conn = pool.get()?;
        auth_service::authenticate(&mut conn, &body.username, &body.password)
    })
    .await??;

    info!("User {} authenticated", mask_username(&user.username));
    let role = user.role();
    Ok(HttpResponse::Ok().json(AuthResponse {
        id: user.id,
        username: user.username,
        role,
        token,
    }))
}

/// Register a new user account
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = AuthenticationRequest,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Username taken or validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn register(
    pool: web::Data<DbPool>,
    body: web::Json<AuthenticationRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;
    let body = body.into_inner();

    let user = web::block(move || -> Result<User, ApiError> {
        let mut conn = pool.get()?;
        auth_service::register(&mut conn, &body.username, &body.password)
    })
    .await??;

    info!("User {} registered", mask_username(&user.username));
    Ok(HttpResponse::Created().json(UserDto::from(user)))
}
