//! User repository for all SQLite operations related to users.

use diesel::prelude::*;
use log::debug;

use crate::models::{NewUser, User};
use crate::schema::users;
use crate::utils::mask_username;

/// Repository for user database operations.
pub struct UserRepository;

impl UserRepository {
    /// Find a user by username.
    pub fn find_by_username(
        conn: &mut SqliteConnection,
        username: &str,
    ) -> QueryResult<Option<User>> {
        debug!(
            "Repository: Finding user by username: {}",
            mask_username(username)
        );
        users::table
            .filter(users::username.eq(username))
            .select(User::as_select())
            .first(conn)
            .optional()
    }

    /// Check whether a username is still free.
    pub fn is_unique(conn: &mut SqliteConnection, username: &str) -> QueryResult<bool> {
        Ok(Self::find_by_username(conn, username)?.is_none())
    }

    /// Insert a new user and return the stored row.
    pub fn insert(conn: &mut SqliteConnection, user: NewUser) -> QueryResult<User> {
        diesel::insert_into(users::table)
            .values(&user)
            .returning(User::as_returning())
            .get_result(conn)
    }
}
