//! Trail request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Difficulty;

/// Request payload for creating a trail
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TrailCreateRequest {
    /// Trail name, unique across all trails
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Fairy Falls")]
    pub name: String,
    /// Trail length in kilometers
    #[validate(range(min = 0.0, message = "Distance must not be negative"))]
    #[schema(example = 10.5)]
    pub distance: f64,
    /// Elevation gain in meters
    #[validate(range(min = 0.0, message = "Elevation must not be negative"))]
    #[schema(example = 120.0)]
    pub elevation: f64,
    /// Difficulty rating
    pub difficulty: Difficulty,
    /// Owning national park
    #[schema(example = 1)]
    pub national_park_id: i32,
}

/// Request payload for updating a trail
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TrailUpdateRequest {
    #[schema(example = 1)]
    pub id: i32,
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Fairy Falls")]
    pub name: String,
    #[validate(range(min = 0.0, message = "Distance must not be negative"))]
    #[schema(example = 10.5)]
    pub distance: f64,
    #[validate(range(min = 0.0, message = "Elevation must not be negative"))]
    #[schema(example = 120.0)]
    pub elevation: f64,
    pub difficulty: Difficulty,
    #[schema(example = 1)]
    pub national_park_id: i32,
}
