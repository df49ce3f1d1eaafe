//! National park handlers for CRUD operations.

use actix_web::{http::header, web, HttpRequest, HttpResponse};
use chrono::Utc;
use log::{info, warn};
use validator::Validate;

use crate::constants::{ERR_PARK_EXISTS, ERR_PARK_NOT_FOUND};
use crate::db::DbPool;
use crate::errors::ApiError;
use crate::middleware::require_auth;
use crate::models::{
    NationalPark, NationalParkCreateRequest, NationalParkDto, NationalParkUpdateRequest,
    NewNationalPark, ParkChangeset,
};
use crate::repositories::ParkRepository;
use crate::validators::validation_errors_to_api_error;

/// List all national parks
#[utoipa::path(
    get,
    path = "/api/v1/nationalparks",
    tag = "NationalParks",
    responses(
        (status = 200, description = "List of national parks", body = Vec<NationalParkDto>)
    )
)]
pub async fn get_national_parks(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let parks = web::block(move || -> Result<Vec<NationalPark>, ApiError> {
        let mut conn = pool.get()?;
        Ok(ParkRepository::list(&mut conn)?)
    })
    .await??;

    let dtos: Vec<NationalParkDto> = parks.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(dtos))
}

/// Get an individual national park
#[utoipa::path(
    get,
    path = "/api/v1/nationalparks/{park_id}",
    tag = "NationalParks",
    params(
        ("park_id" = i32, Path, description = "Id of the national park")
    ),
    responses(
        (status = 200, description = "National park found", body = NationalParkDto),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "National park not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_national_park(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    require_auth(&req)?;
    let park_id = path.into_inner();

    let park = web::block(move || -> Result<Option<NationalPark>, ApiError> {
        let mut conn = pool.get()?;
        Ok(ParkRepository::get(&mut conn, park_id)?)
    })
    .await??
    .ok_or_else(|| {
        warn!("National park not found with id: {}", park_id);
        ApiError::NotFound(ERR_PARK_NOT_FOUND.to_string())
    })?;

    Ok(HttpResponse::Ok().json(NationalParkDto::from(park)))
}

/// Create a national park
#[utoipa::path(
    post,
    path = "/api/v1/nationalparks",
    tag = "NationalParks",
    request_body = NationalParkCreateRequest,
    responses(
        (status = 201, description = "National park created", body = NationalParkDto),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 404, description = "National park already exists", body = crate::models::ErrorResponse),
        (status = 500, description = "Persistence failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_national_park(
    pool: web::Data<DbPool>,
    body: web::Json<NationalParkCreateRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;
    let body = body.into_inner();

    let park = web::block(move || -> Result<NationalPark, ApiError> {
        let mut conn = pool.get()?;
        if ParkRepository::exists_by_name(&mut conn, &body.name)? {
            return Err(ApiError::NotFound(ERR_PARK_EXISTS.to_string()));
        }

        Ok(ParkRepository::create(
            &mut conn,
            NewNationalPark {
                name: body.name,
                state: body.state,
                created: Utc::now().naive_utc(),
                established: body.established,
                picture: body.picture,
            },
        )?)
    })
    .await??;

    info!("Created national park {} ({})", park.name, park.id);
    Ok(HttpResponse::Created()
        .insert_header((
            header::LOCATION,
            format!("/api/v1/nationalparks/{}", park.id),
        ))
        .json(NationalParkDto::from(park)))
}

/// Update a national park
#[utoipa::path(
    patch,
    path = "/api/v1/nationalparks/{park_id}",
    tag = "NationalParks",
    params(
        ("park_id" = i32, Path, description = "Id of the national park")
    ),
    request_body = NationalParkUpdateRequest,
    responses(
        (status = 204, description = "National park updated"),
        (status = 400, description = "Id mismatch or validation error", body = crate::models::ErrorResponse),
        (status = 404, description = "National park not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Persistence failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_national_park(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<NationalParkUpdateRequest>,
) -> Result<HttpResponse, ApiError> {
    let park_id = path.into_inner();
    if park_id != body.id {
        return Err(ApiError::BadRequest(
            crate::constants::ERR_ID_MISMATCH.to_string(),
        ));
    }
    body.validate().map_err(validation_errors_to_api_error)?;
    let body = body.into_inner();

    web::block(move || -> Result<(), ApiError> {
        let mut conn = pool.get()?;
        if !ParkRepository::exists(&mut conn, park_id)? {
            return Err(ApiError::NotFound(ERR_PARK_NOT_FOUND.to_string()));
        }

        let updated = ParkRepository::update(
            &mut conn,
            park_id,
            ParkChangeset {
                name: body.name.clone(),
                state: body.state,
                established: body.established,
                picture: body.picture,
            },
        )?;
        if updated == 0 {
            return Err(ApiError::InternalServerError(format!(
                "Something went wrong while updating National Park {}",
                body.name
            )));
        }
        Ok(())
    })
    .await??;

    Ok(HttpResponse::NoContent().finish())
}

/// Delete a national park
#[utoipa::path(
    delete,
    path = "/api/v1/nationalparks/{park_id}",
    tag = "NationalParks",
    params(
        ("park_id" = i32, Path, description = "Id of the national park")
    ),
    responses(
        (status = 204, description = "National park deleted"),
        (status = 404, description = "National park not found", body = crate::models::ErrorResponse),
        (status = 409, description = "Trails still reference the park", body = crate::models::ErrorResponse),
        (status = 500, description = "Persistence failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_national_park(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let park_id = path.into_inner();

    web::block(move || -> Result<(), ApiError> {
        let mut conn = pool.get()?;
        if !ParkRepository::exists(&mut conn, park_id)? {
            return Err(ApiError::NotFound(ERR_PARK_NOT_FOUND.to_string()));
        }

        ParkRepository::delete(&mut conn, park_id)?;
        Ok(())
    })
    .await??;

    info!("Deleted national park {}", park_id);
    Ok(HttpResponse::NoContent().finish())
}

/// List national parks, v2 showcase: returns only the first park.
#[utoipa::path(
    get,
    path = "/api/v2/nationalparks",
    tag = "NationalParks",
    responses(
        (status = 200, description = "First national park", body = NationalParkDto),
        (status = 404, description = "No parks recorded yet", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_national_parks_v2(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let parks = web::block(move || -> Result<Vec<NationalPark>, ApiError> {
        let mut conn = pool.get()?;
        Ok(ParkRepository::list(&mut conn)?)
    })
    .await??;

    let first = parks
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::NotFound(ERR_PARK_NOT_FOUND.to_string()))?;

    Ok(HttpResponse::Ok().json(NationalParkDto::from(first)))
}
