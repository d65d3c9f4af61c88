//! Provider and facility directory queries.
//!
//! Categorical fields (county, facility type) match exactly; free-text
//! fields (name, specialty, services) match as case-insensitive substrings.
//! Every supplied filter narrows the result; absent or empty filters are ignored.

use rusqlite::Connection;

use crate::db::repository::Predicates;
use crate::db::{facility_from_row, user_from_row, DatabaseError, FACILITY_COLUMNS, USER_COLUMNS};
use crate::models::{FacilityFilter, HealthFacility, ProfessionalFilter, User};

/// Approved professionals matching every supplied filter, in storage order.
pub fn find_professionals(
    conn: &Connection,
    filter: &ProfessionalFilter,
) -> Result<Vec<User>, DatabaseError> {
    let mut predicates = Predicates::new();
    predicates.exact("county", filter.county.as_deref());
    predicates.contains("specialty", filter.specialty.as_deref());
    predicates.contains("name", filter.name.as_deref());
    // Profession is an alias over the specialty column, applied as its own predicate.
    predicates.contains("specialty", filter.profession.as_deref());

    let mut sql = predicates.where_sql(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE role = 'professional' AND is_approved = 1"
    ));
    sql.push_str(" ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(predicates.param_refs().as_slice(), user_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

/// Distinct non-empty specialties among approved professionals, for filter controls.
pub fn distinct_specialties(conn: &Connection) -> Result<Vec<String>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT specialty FROM users
         WHERE role = 'professional' AND is_approved = 1
           AND specialty IS NOT NULL AND TRIM(specialty) <> ''
         ORDER BY specialty",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

/// Facilities matching every supplied filter, in storage order. No approval gate.
pub fn find_facilities(
    conn: &Connection,
    filter: &FacilityFilter,
) -> Result<Vec<HealthFacility>, DatabaseError> {
    let mut predicates = Predicates::new();
    predicates.exact("county", filter.county.as_deref());
    predicates.exact("facility_type", filter.facility_type.as_deref());
    predicates.contains("services", filter.service.as_deref());
    predicates.contains("name", filter.name.as_deref());

    let mut sql =
        predicates.where_sql(&format!("SELECT {FACILITY_COLUMNS} FROM health_facilities WHERE 1=1"));
    sql.push_str(" ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(predicates.param_refs().as_slice(), facility_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn distinct_facility_types(conn: &Connection) -> Result<Vec<String>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT facility_type FROM health_facilities
         WHERE facility_type IS NOT NULL AND TRIM(facility_type) <> ''
         ORDER BY facility_type",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
