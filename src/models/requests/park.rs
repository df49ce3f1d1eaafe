//! National park request models.

use chrono::NaiveDateTime;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a national park
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NationalParkCreateRequest {
    /// Park name, unique across all parks
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Yellowstone")]
    pub name: String,
    /// State the park belongs to
    #[validate(length(min = 1, max = 100, message = "State must be between 1 and 100 characters"))]
    #[schema(example = "Wyoming")]
    pub state: String,
    /// When the park was established
    pub established: NaiveDateTime,
    /// Optional picture blob
    pub picture: Option<Vec<u8>>,
}

/// Request payload for updating a national park. Carries the id so the
/// handler can reject a path/body mismatch.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NationalParkUpdateRequest {
    #[schema(example = 1)]
    pub id: i32,
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Yellowstone")]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "State must be between 1 and 100 characters"))]
    #[schema(example = "Wyoming")]
    pub state: String,
    pub established: NaiveDateTime,
    pub picture: Option<Vec<u8>>,
}
