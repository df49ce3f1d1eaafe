//! National park entity and its diesel insert/update companions.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::schema::national_parks;

/// National park row as stored in SQLite.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = national_parks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NationalPark {
    pub id: i32,
    pub name: String,
    pub state: String,
    pub created: NaiveDateTime,
    pub established: NaiveDateTime,
    pub picture: Option<Vec<u8>>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = national_parks)]
pub struct NewNationalPark {
    pub name: String,
    pub state: String,
    pub created: NaiveDateTime,
    pub established: NaiveDateTime,
    pub picture: Option<Vec<u8>>,
}

// treat_none_as_null so a PATCH without a picture clears the stored one
// instead of keeping it
#[derive(Debug, AsChangeset)]
#[diesel(table_name = national_parks)]
#[diesel(treat_none_as_null = true)]
pub struct ParkChangeset {
    pub name: String,
    pub state: String,
    pub established: NaiveDateTime,
    pub picture: Option<Vec<u8>>,
}
