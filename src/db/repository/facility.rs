use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::DatabaseError;
use crate::models::*;

pub(crate) const FACILITY_COLUMNS: &str =
    "id, name, county, facility_type, address, contact, services, latitude, longitude";

pub(crate) fn facility_from_row(row: &Row<'_>) -> rusqlite::Result<HealthFacility> {
    Ok(HealthFacility {
        id: row.get(0)?,
        name: row.get(1)?,
        county: row.get(2)?,
        facility_type: row.get(3)?,
        address: row.get(4)?,
        contact: row.get(5)?,
        services: row.get(6)?,
        latitude: row.get(7)?,
        longitude: row.get(8)?,
    })
}

pub fn insert_facility(
    conn: &Connection,
    facility: &NewFacility,
) -> Result<HealthFacility, DatabaseError> {
    conn.execute(
        "INSERT INTO health_facilities (name, county, facility_type, address, contact,
         services, latitude, longitude)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            facility.name,
            facility.county,
            facility.facility_type,
            facility.address,
            facility.contact,
            facility.services,
            facility.latitude,
            facility.longitude,
        ],
    )?;

    Ok(HealthFacility {
        id: conn.last_insert_rowid(),
        name: facility.name.clone(),
        county: facility.county.clone(),
        facility_type: facility.facility_type.clone(),
        address: facility.address.clone(),
        contact: facility.contact.clone(),
        services: facility.services.clone(),
        latitude: facility.latitude,
        longitude: facility.longitude,
    })
}

pub fn get_facility(conn: &Connection, id: i64) -> Result<Option<HealthFacility>, DatabaseError> {
    let sql = format!("SELECT {FACILITY_COLUMNS} FROM health_facilities WHERE id = ?1");
    let facility = conn.query_row(&sql, params![id], facility_from_row).optional()?;
    Ok(facility)
}
