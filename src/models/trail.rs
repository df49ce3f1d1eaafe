//! Trail entity with its difficulty rating.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::schema::trails;

/// Trail difficulty rating, stored as lowercase text.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
    Expert,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Moderate => write!(f, "moderate"),
            Difficulty::Difficult => write!(f, "difficult"),
            Difficulty::Expert => write!(f, "expert"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "moderate" => Ok(Difficulty::Moderate),
            "difficult" => Ok(Difficulty::Difficult),
            "expert" => Ok(Difficulty::Expert),
            other => Err(format!("unknown trail difficulty: {}", other)),
        }
    }
}

/// Trail row as stored in SQLite.
#[derive(Debug, Clone, Selectable)]
#[diesel(table_name = trails)]
pub struct Trail {
    pub id: i32,
    pub name: String,
    pub distance: f64,
    pub elevation: f64,
    pub difficulty: Difficulty,
    pub date_created: NaiveDateTime,
    pub national_park_id: i32,
}

impl Queryable<trails::SqlType, Sqlite> for Trail {
    type Row = (i32, String, f64, f64, String, NaiveDateTime, i32);

    fn build(row: Self::Row) -> diesel::deserialize::Result<Self> {
        Ok(Self {
            id: row.0,
            name: row.1,
            distance: row.2,
            elevation: row.3,
            difficulty: row.4.parse()?,
            date_created: row.5,
            national_park_id: row.6,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = trails)]
pub struct NewTrail {
    pub name: String,
    pub distance: f64,
    pub elevation: f64,
    pub difficulty: String,
    pub date_created: NaiveDateTime,
    pub national_park_id: i32,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = trails)]
pub struct TrailChangeset {
    pub name: String,
    pub distance: f64,
    pub elevation: f64,
    pub difficulty: String,
    pub national_park_id: i32,
}
