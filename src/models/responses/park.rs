//! National park DTO returned on the wire.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::NationalPark;

/// National park data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct NationalParkDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Yellowstone")]
    pub name: String,
    #[schema(example = "Wyoming")]
    pub state: String,
    /// When the record was created
    pub created: NaiveDateTime,
    /// When the park was established
    pub established: NaiveDateTime,
    /// Optional picture blob
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<Vec<u8>>,
}

impl From<NationalPark> for NationalParkDto {
    fn from(park: NationalPark) -> Self {
        Self {
            id: park.id,
            name: park.name,
            state: park.state,
            created: park.created,
            established: park.established,
            picture: park.picture,
        }
    }
}
