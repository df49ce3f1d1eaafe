//! Trail DTO returned on the wire.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Difficulty, Trail};

/// Trail data returned in API responses, flattened with the owning
/// park's name from the join.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct TrailDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Fairy Falls")]
    pub name: String,
    #[schema(example = 10.5)]
    pub distance: f64,
    #[schema(example = 120.0)]
    pub elevation: f64,
    pub difficulty: Difficulty,
    pub date_created: NaiveDateTime,
    #[schema(example = 1)]
    pub national_park_id: i32,
    /// Name of the owning national park
    #[schema(example = "Yellowstone")]
    pub national_park_name: String,
}

impl From<(Trail, String)> for TrailDto {
    fn from((trail, park_name): (Trail, String)) -> Self {
        Self {
            id: trail.id,
            name: trail.name,
            distance: trail.distance,
            elevation: trail.elevation,
            difficulty: trail.difficulty,
            date_created: trail.date_created,
            national_park_id: trail.national_park_id,
            national_park_name: park_name,
        }
    }
}
