//! Data access layer: one repository per aggregate, thin wrappers over
//! diesel queries. Repositories are synchronous; handlers call them from
//! `web::block`.

pub mod park_repository;
pub mod trail_repository;
pub mod user_repository;

pub use park_repository::ParkRepository;
pub use trail_repository::TrailRepository;
pub use user_repository::UserRepository;
