//! National park repository for all SQLite operations related to parks.

use diesel::dsl::{exists, select};
use diesel::prelude::*;
use log::debug;

use crate::models::{NationalPark, NewNationalPark, ParkChangeset};
use crate::schema::national_parks;

/// Repository for national park database operations.
pub struct ParkRepository;

impl ParkRepository {
    /// List all parks ordered by name.
    pub fn list(conn: &mut SqliteConnection) -> QueryResult<Vec<NationalPark>> {
        national_parks::table
            .order(national_parks::name.asc())
            .select(NationalPark::as_select())
            .load(conn)
    }

    /// Find a park by id.
    pub fn get(conn: &mut SqliteConnection, park_id: i32) -> QueryResult<Option<NationalPark>> {
        debug!("Repository: Finding national park by id: {}", park_id);
        national_parks::table
            .find(park_id)
            .select(NationalPark::as_select())
            .first(conn)
            .optional()
    }

    /// Check whether a park with this id exists.
    pub fn exists(conn: &mut SqliteConnection, park_id: i32) -> QueryResult<bool> {
        select(exists(
            national_parks::table.filter(national_parks::id.eq(park_id)),
        ))
        .get_result(conn)
    }

    /// Check whether a park with this name exists.
    pub fn exists_by_name(conn: &mut SqliteConnection, name: &str) -> QueryResult<bool> {
        select(exists(
            national_parks::table.filter(national_parks::name.eq(name)),
        ))
        .get_result(conn)
    }

    /// Insert a new park and return the stored row.
    pub fn create(conn: &mut SqliteConnection, park: NewNationalPark) -> QueryResult<NationalPark> {
        diesel::insert_into(national_parks::table)
            .values(&park)
            .returning(NationalPark::as_returning())
            .get_result(conn)
    }

    /// Update a park, returns the number of affected rows.
    pub fn update(
        conn: &mut SqliteConnection,
        park_id: i32,
        changes: ParkChangeset,
    ) -> QueryResult<usize> {
        diesel::update(national_parks::table.find(park_id))
            .set(&changes)
            .execute(conn)
    }

    /// Delete a park, returns the number of affected rows. Fails with a
    /// foreign key violation while trails still reference the park.
    pub fn delete(conn: &mut SqliteConnection, park_id: i32) -> QueryResult<usize> {
        diesel::delete(national_parks::table.find(park_id)).execute(conn)
    }
}
