//! Application constants module.
//!
//! Centralizes constant strings used throughout the application:
//! error messages, success messages, and role names.

pub mod errors;
pub mod messages;
pub mod roles;

pub use errors::*;
pub use messages::*;
pub use roles::*;
