use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::constants::{ERR_BLOCKING, ERR_DB_POOL, ERR_INVALID_TOKEN, ERR_PARK_HAS_TRAILS};
use crate::models::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
    ValidationError(Vec<String>),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(message) => write!(f, "Bad Request: {}", message),
            ApiError::Unauthorized(message) => write!(f, "Unauthorized: {}", message),
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::Conflict(message) => write!(f, "Conflict: {}", message),
            ApiError::InternalServerError(message) => {
                write!(f, "Internal Server Error: {}", message)
            }
            ApiError::ValidationError(errors) => write!(f, "Validation Error: {:?}", errors),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest(message) => HttpResponse::BadRequest().json(ErrorResponse {
                success: false,
                message: message.clone(),
                errors: None,
            }),
            ApiError::Unauthorized(message) => HttpResponse::Unauthorized().json(ErrorResponse {
                success: false,
                message: message.clone(),
                errors: None,
            }),
            ApiError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
                success: false,
                message: message.clone(),
                errors: None,
            }),
            ApiError::Conflict(message) => HttpResponse::Conflict().json(ErrorResponse {
                success: false,
                message: message.clone(),
                errors: None,
            }),
            ApiError::InternalServerError(message) => {
                HttpResponse::InternalServerError().json(ErrorResponse {
                    success: false,
                    message: message.clone(),
                    errors: None,
                })
            }
            ApiError::ValidationError(errors) => HttpResponse::BadRequest().json(ErrorResponse {
                success: false,
                message: "Validation failed".to_string(),
                errors: Some(errors.clone()),
            }),
        }
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::NotFound => ApiError::NotFound(err.to_string()),
            Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                ApiError::Conflict(ERR_PARK_HAS_TRAILS.to_string())
            }
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                ApiError::Conflict(info.message().to_string())
            }
            other => ApiError::InternalServerError(other.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for ApiError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        ApiError::InternalServerError(format!("{}: {}", ERR_DB_POOL, err))
    }
}

impl From<actix_web::error::BlockingError> for ApiError {
    fn from(_: actix_web::error::BlockingError) -> Self {
        ApiError::InternalServerError(ERR_BLOCKING.to_string())
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(_: jsonwebtoken::errors::Error) -> Self {
        ApiError::Unauthorized(ERR_INVALID_TOKEN.to_string())
    }
}
