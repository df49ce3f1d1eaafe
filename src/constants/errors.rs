//! Error message constants used throughout the application.

// Authentication errors
pub const ERR_AUTH_REQUIRED: &str = "Authentication required";
pub const ERR_INVALID_AUTH_HEADER: &str = "Missing or invalid authorization header";
pub const ERR_INVALID_TOKEN: &str = "Invalid or expired token";
pub const ERR_ADMIN_ONLY: &str = "This resource requires the Admin role";

// User errors
pub const ERR_INVALID_CREDENTIALS: &str = "Username or password is incorrect";
pub const ERR_USERNAME_EXISTS: &str = "Username already exists";

// National park errors
pub const ERR_PARK_NOT_FOUND: &str = "National Park not found";
pub const ERR_PARK_EXISTS: &str = "National Park already exists";
pub const ERR_PARK_HAS_TRAILS: &str = "National Park still has trails attached to it";
pub const ERR_PARK_MISSING: &str = "National Park does not exist";

// Trail errors
pub const ERR_TRAIL_NOT_FOUND: &str = "Trail not found";
pub const ERR_TRAIL_EXISTS: &str = "Trail already exists";

// Request errors
pub const ERR_ID_MISMATCH: &str = "Path id does not match body id";

// Infrastructure errors
pub const ERR_BLOCKING: &str = "Worker thread pool error";
pub const ERR_DB_POOL: &str = "Database connection pool error";
