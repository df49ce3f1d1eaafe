//! Role name constants for role-based access control.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
