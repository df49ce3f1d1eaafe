pub mod claims;
pub mod national_park;
pub mod requests;
pub mod responses;
pub mod trail;
pub mod user;

pub use claims::Claims;
pub use national_park::{NationalPark, NewNationalPark, ParkChangeset};
pub use requests::{
    AuthenticationRequest, NationalParkCreateRequest, NationalParkUpdateRequest,
    TrailCreateRequest, TrailUpdateRequest,
};
pub use responses::{
    AuthResponse, ErrorResponse, HealthResponse, NationalParkDto, TrailDto, UserDto,
};
pub use trail::{Difficulty, NewTrail, Trail, TrailChangeset};
pub use user::{NewUser, Role, User};
