use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{enum_column, now_utc};
use crate::db::DatabaseError;
use crate::models::*;

pub(crate) const USER_COLUMNS: &str = "id, name, email, password_hash, role, age, county, contact,
    gender, medical_history, specialty, license_info, availability, rating, is_approved, created_at";

pub(crate) fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        role: enum_column(row, 4)?,
        age: row.get(5)?,
        county: row.get(6)?,
        contact: row.get(7)?,
        gender: row.get(8)?,
        medical_history: row.get(9)?,
        specialty: row.get(10)?,
        license_info: row.get(11)?,
        availability: row.get(12)?,
        rating: row.get(13)?,
        is_approved: row.get::<_, i32>(14)? != 0,
        created_at: row.get(15)?,
    })
}

/// Insert a user. Patients are approved on creation; professionals start pending.
/// A duplicate email fails with `ConstraintViolation`.
pub fn insert_user(conn: &Connection, user: &NewUser) -> Result<User, DatabaseError> {
    let is_approved = user.role == UserRole::Patient;
    let rating = user.rating.unwrap_or(DEFAULT_RATING);
    let created_at = now_utc();

    conn.execute(
        "INSERT INTO users (name, email, password_hash, role, age, county, contact, gender,
         medical_history, specialty, license_info, availability, rating, is_approved, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        params![
            user.name,
            user.email,
            user.password_hash,
            user.role.as_str(),
            user.age,
            user.county,
            user.contact,
            user.gender,
            user.medical_history,
            user.specialty,
            user.license_info,
            user.availability,
            rating,
            is_approved as i32,
            created_at,
        ],
    )?;

    Ok(User {
        id: conn.last_insert_rowid(),
        name: user.name.clone(),
        email: user.email.clone(),
        password_hash: user.password_hash.clone(),
        role: user.role,
        age: user.age,
        county: user.county.clone(),
        contact: user.contact.clone(),
        gender: user.gender.clone(),
        medical_history: user.medical_history.clone(),
        specialty: user.specialty.clone(),
        license_info: user.license_info.clone(),
        availability: user.availability.clone(),
        rating,
        is_approved,
        created_at,
    })
}

pub fn get_user(conn: &Connection, id: i64) -> Result<Option<User>, DatabaseError> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1");
    let user = conn.query_row(&sql, params![id], user_from_row).optional()?;
    Ok(user)
}

pub fn get_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>, DatabaseError> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1 LIMIT 1");
    let user = conn.query_row(&sql, params![email], user_from_row).optional()?;
    Ok(user)
}

/// Flip a professional account to approved. Returns `false` when no professional has that id.
pub fn set_professional_approved(conn: &Connection, id: i64) -> Result<bool, DatabaseError> {
    let changed = conn.execute(
        "UPDATE users SET is_approved = 1 WHERE id = ?1 AND role = 'professional'",
        params![id],
    )?;
    Ok(changed > 0)
}

/// Professionals still waiting for approval, oldest first.
pub fn get_pending_professionals(conn: &Connection) -> Result<Vec<User>, DatabaseError> {
    let sql = format!(
        "SELECT {USER_COLUMNS} FROM users
         WHERE role = 'professional' AND is_approved = 0 ORDER BY id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], user_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
