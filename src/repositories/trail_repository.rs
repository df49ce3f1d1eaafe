//! Trail repository for all SQLite operations related to trails.
//!
//! List queries join the owning park so DTOs can carry the park name
//! without a second round trip.

use diesel::dsl::{exists, select};
use diesel::prelude::*;
use log::debug;

use crate::models::{NewTrail, Trail, TrailChangeset};
use crate::schema::{national_parks, trails};

/// Repository for trail database operations.
pub struct TrailRepository;

impl TrailRepository {
    /// List all trails with the owning park's name, ordered by name.
    pub fn list(conn: &mut SqliteConnection) -> QueryResult<Vec<(Trail, String)>> {
        trails::table
            .inner_join(national_parks::table)
            .order(trails::name.asc())
            .select((Trail::as_select(), national_parks::name))
            .load(conn)
    }

    /// Find a trail by id with the owning park's name.
    pub fn get(conn: &mut SqliteConnection, trail_id: i32) -> QueryResult<Option<(Trail, String)>> {
        debug!("Repository: Finding trail by id: {}", trail_id);
        trails::table
            .inner_join(national_parks::table)
            .filter(trails::id.eq(trail_id))
            .select((Trail::as_select(), national_parks::name))
            .first(conn)
            .optional()
    }

    /// List the trails belonging to one park.
    pub fn list_in_park(
        conn: &mut SqliteConnection,
        park_id: i32,
    ) -> QueryResult<Vec<(Trail, String)>> {
        trails::table
            .inner_join(national_parks::table)
            .filter(trails::national_park_id.eq(park_id))
            .order(trails::name.asc())
            .select((Trail::as_select(), national_parks::name))
            .load(conn)
    }

    /// Check whether a trail with this id exists.
    pub fn exists(conn: &mut SqliteConnection, trail_id: i32) -> QueryResult<bool> {
        select(exists(trails::table.filter(trails::id.eq(trail_id)))).get_result(conn)
    }

    /// Check whether a trail with this name exists.
    pub fn exists_by_name(conn: &mut SqliteConnection, name: &str) -> QueryResult<bool> {
        select(exists(trails::table.filter(trails::name.eq(name)))).get_result(conn)
    }

    /// Insert a new trail and return the stored row.
    pub fn create(conn: &mut SqliteConnection, trail: NewTrail) -> QueryResult<Trail> {
        diesel::insert_into(trails::table)
            .values(&trail)
            .returning(Trail::as_returning())
            .get_result(conn)
    }

    /// Update a trail, returns the number of affected rows.
    pub fn update(
        conn: &mut SqliteConnection,
        trail_id: i32,
        changes: TrailChangeset,
    ) -> QueryResult<usize> {
        diesel::update(trails::table.find(trail_id))
            .set(&changes)
            .execute(conn)
    }

    /// Delete a trail, returns the number of affected rows.
    pub fn delete(conn: &mut SqliteConnection, trail_id: i32) -> QueryResult<usize> {
        diesel::delete(trails::table.find(trail_id)).execute(conn)
    }
}
