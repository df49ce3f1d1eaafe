pub mod park_handler;
pub mod trail_handler;
pub mod user_handler;

pub use park_handler::*;
pub use trail_handler::*;
pub use user_handler::*;
