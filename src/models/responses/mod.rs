//! Response payload models.

pub mod api;
pub mod park;
pub mod trail;
pub mod user;

pub use api::{ErrorResponse, HealthResponse};
pub use park::NationalParkDto;
pub use trail::TrailDto;
pub use user::{AuthResponse, UserDto};
