//! User entity and roles for role-based access control.

use std::fmt;

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::ROLE_ADMIN;
use crate::schema::users;

/// User roles for role-based access control
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
        }
    }
}

impl Role {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Parse role from string, unknown values fall back to User
    pub fn parse(s: &str) -> Self {
        if s.to_lowercase() == ROLE_ADMIN {
            Role::Admin
        } else {
            Role::User
        }
    }
}

/// User row as stored in SQLite. The role is kept as text so the table
/// stays readable with plain sqlite3.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

impl User {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_is_detected() {
        assert!(Role::parse("admin").is_admin());
        assert!(Role::parse("Admin").is_admin());
        assert!(!Role::parse("user").is_admin());
    }

    #[test]
    fn unknown_role_falls_back_to_user() {
        assert_eq!(Role::parse("superuser"), Role::User);
    }
}
