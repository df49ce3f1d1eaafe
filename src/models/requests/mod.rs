//! Request payload models.

pub mod auth;
pub mod park;
pub mod trail;

pub use auth::AuthenticationRequest;
pub use park::{NationalParkCreateRequest, NationalParkUpdateRequest};
pub use trail::{TrailCreateRequest, TrailUpdateRequest};
