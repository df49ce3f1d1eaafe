//! Trail handlers for CRUD operations.
//!
//! Reading a single trail is the one admin-gated route in the API, kept
//! that way as the showcase for claim-based role checks.

use actix_web::{http::header, web, HttpRequest, HttpResponse};
use chrono::Utc;
use log::{info, warn};
use validator::Validate;

use crate::constants::{ERR_PARK_MISSING, ERR_TRAIL_EXISTS, ERR_TRAIL_NOT_FOUND};
use crate::db::DbPool;
use crate::errors::ApiError;
use crate::middleware::{require_admin, require_auth};
use crate::models::{
    NewTrail, Trail, TrailChangeset, TrailCreateRequest, TrailDto, TrailUpdateRequest,
};
use crate::repositories::{ParkRepository, TrailRepository};
use crate::validators::validation_errors_to_api_error;

/// List all trails
#[utoipa::path(
    get,
    path = "/api/v1/trails",
    tag = "Trails",
    responses(
        (status = 200, description = "List of trails", body = Vec<TrailDto>)
    )
)]
pub async fn get_trails(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let trails = web::block(move || -> Result<Vec<(Trail, String)>, ApiError> {
        let mut conn = pool.get()?;
        Ok(TrailRepository::list(&mut conn)?)
    })
    .await??;

    let dtos: Vec<TrailDto> = trails.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(dtos))
}

/// Get an individual trail (Admin only)
#[utoipa::path(
    get,
    path = "/api/v1/trails/{trail_id}",
    tag = "Trails",
    params(
        ("trail_id" = i32, Path, description = "Id of the trail")
    ),
    responses(
        (status = 200, description = "Trail found", body = TrailDto),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Trail not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_trail(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    require_admin(&claims)?;
    let trail_id = path.into_inner();

    let trail = web::block(move || -> Result<Option<(Trail, String)>, ApiError> {
        let mut conn = pool.get()?;
        Ok(TrailRepository::get(&mut conn, trail_id)?)
    })
    .await??
    .ok_or_else(|| {
        warn!("Trail not found with id: {}", trail_id);
        ApiError::NotFound(ERR_TRAIL_NOT_FOUND.to_string())
    })?;

    Ok(HttpResponse::Ok().json(TrailDto::from(trail)))
}

/// List the trails in one national park
#[utoipa::path(
    get,
    path = "/api/v1/trails/nationalpark/{park_id}",
    tag = "Trails",
    params(
        ("park_id" = i32, Path, description = "Id of the national park")
    ),
    responses(
        (status = 200, description = "Trails in the park", body = Vec<TrailDto>),
        (status = 404, description = "National park not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_trails_in_national_park(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let park_id = path.into_inner();

    let trails = web::block(move || -> Result<Vec<(Trail, String)>, ApiError> {
        let mut conn = pool.get()?;
        if !ParkRepository::exists(&mut conn, park_id)? {
            return Err(ApiError::NotFound(ERR_PARK_MISSING.to_string()));
        }
        Ok(TrailRepository::list_in_park(&mut conn, park_id)?)
    })
    .await??;

    let dtos: Vec<TrailDto> = trails.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(dtos))
}

/// Create a trail
#[utoipa::path(
    post,
    path = "/api/v1/trails",
    tag = "Trails",
    request_body = TrailCreateRequest,
    responses(
        (status = 201, description = "Trail created", body = TrailDto),
        (status = 400, description = "Validation error or unknown park", body = crate::models::ErrorResponse),
        (status = 404, description = "Trail already exists", body = crate::models::ErrorResponse),
        (status = 500, description = "Persistence failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_trail(
    pool: web::Data<DbPool>,
    body: web::Json<TrailCreateRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;
    let body = body.into_inner();

    let (trail, park_name) = web::block(move || -> Result<(Trail, String), ApiError> {
        let mut conn = pool.get()?;
        if TrailRepository::exists_by_name(&mut conn, &body.name)? {
            return Err(ApiError::NotFound(ERR_TRAIL_EXISTS.to_string()));
        }
        let park = ParkRepository::get(&mut conn, body.national_park_id)?
            .ok_or_else(|| ApiError::BadRequest(ERR_PARK_MISSING.to_string()))?;

        let trail = TrailRepository::create(
            &mut conn,
            NewTrail {
                name: body.name,
                distance: body.distance,
                elevation: body.elevation,
                difficulty: body.difficulty.to_string(),
                date_created: Utc::now().naive_utc(),
                national_park_id: body.national_park_id,
            },
        )?;
        Ok((trail, park.name))
    })
    .await??;

    info!("Created trail {} ({})", trail.name, trail.id);
    let location = format!("/api/v1/trails/{}", trail.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(TrailDto::from((trail, park_name))))
}

/// Update a trail
#[utoipa::path(
    patch,
    path = "/api/v1/trails/{trail_id}",
    tag = "Trails",
    params(
        ("trail_id" = i32, Path, description = "Id of the trail")
    ),
    request_body = TrailUpdateRequest,
    responses(
        (status = 204, description = "Trail updated"),
        (status = 400, description = "Id mismatch or validation error", body = crate::models::ErrorResponse),
        (status = 404, description = "Trail not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Persistence failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_trail(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<TrailUpdateRequest>,
) -> Result<HttpResponse, ApiError> {
    let trail_id = path.into_inner();
    if trail_id != body.id {
        return Err(ApiError::BadRequest(
            crate::constants::ERR_ID_MISMATCH.to_string(),
        ));
    }
    body.validate().map_err(validation_errors_to_api_error)?;
    let body = body.into_inner();

    web::block(move || -> Result<(), ApiError> {
        let mut conn = pool.get()?;
        if !TrailRepository::exists(&mut conn, trail_id)? {
            return Err(ApiError::NotFound(ERR_TRAIL_NOT_FOUND.to_string()));
        }
        if !ParkRepository::exists(&mut conn, body.national_park_id)? {
            return Err(ApiError::BadRequest(ERR_PARK_MISSING.to_string()));
        }

        let updated = TrailRepository::update(
            &mut conn,
            trail_id,
            TrailChangeset {
                name: body.name.clone(),
                distance: body.distance,
                elevation: body.elevation,
                difficulty: body.difficulty.to_string(),
                national_park_id: body.national_park_id,
            },
        )?;
        if updated == 0 {
            return Err(ApiError::InternalServerError(format!(
                "Something went wrong while updating Trail {}",
                body.name
            )));
        }
        Ok(())
    })
    .await??;

    Ok(HttpResponse::NoContent().finish())
}

/// Delete a trail
#[utoipa::path(
    delete,
    path = "/api/v1/trails/{trail_id}",
    tag = "Trails",
    params(
        ("trail_id" = i32, Path, description = "Id of the trail")
    ),
    responses(
        (status = 204, description = "Trail deleted"),
        (status = 404, description = "Trail not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Persistence failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_trail(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let trail_id = path.into_inner();

    web::block(move || -> Result<(), ApiError> {
        let mut conn = pool.get()?;
        if !TrailRepository::exists(&mut conn, trail_id)? {
            return Err(ApiError::NotFound(ERR_TRAIL_NOT_FOUND.to_string()));
        }

        TrailRepository::delete(&mut conn, trail_id)?;
        Ok(())
    })
    .await??;

    info!("Deleted trail {}", trail_id);
    Ok(HttpResponse::NoContent().finish())
}
