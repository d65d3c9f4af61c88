//! Repository layer: entity-scoped database operations.
//!
//! One sub-module per table. All public functions are re-exported here.

mod appointment;
mod assessment;
mod education;
mod facility;
mod predicates;
mod prescription;
mod user;

use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike, Utc};
use rusqlite::{Connection, Row};

use super::DatabaseError;
use crate::models::EntityKind;

pub use appointment::*;
pub use assessment::*;
pub use education::*;
pub use facility::*;
pub use prescription::*;
pub use user::*;

pub(crate) use predicates::Predicates;

/// Current UTC time at second precision, the resolution stored in every timestamp column.
pub fn now_utc() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Number of rows stored for an entity kind.
pub fn count_entities(conn: &Connection, kind: EntityKind) -> Result<i64, DatabaseError> {
    let sql = format!("SELECT COUNT(*) FROM {}", kind.table_name());
    let count = conn.query_row(&sql, [], |row| row.get::<_, i64>(0))?;
    Ok(count)
}

/// Read a `str_enum` column, reporting unknown values as a conversion failure.
pub(crate) fn enum_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = DatabaseError>,
{
    let raw: String = row.get(idx)?;
    raw.parse().map_err(|e: DatabaseError| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}
