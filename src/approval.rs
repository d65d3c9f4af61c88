//! Professional approval gate and the admin overview.
//!
//! Approval is one-way (pending → approved) and has no caller check:
//! any caller may approve any id. There is no reject or revoke.

use rusqlite::Connection;
use serde::Serialize;

use crate::db;
use crate::error::CareError;
use crate::models::{EntityKind, User};
use crate::session::ActingUser;

#[derive(Debug, Clone, Serialize)]
pub struct AdminOverview {
    pub pending_professionals: Vec<User>,
    pub total_users: i64,
    pub total_appointments: i64,
}

/// Approve a professional account. An unknown id is a silent no-op.
/// Returns whether an account was approved by this call.
pub fn approve_professional(conn: &Connection, professional_id: i64) -> Result<bool, CareError> {
    let approved = db::set_professional_approved(conn, professional_id)?;
    if approved {
        tracing::info!(professional_id, "Professional approved");
    } else {
        tracing::debug!(professional_id, "Approval ignored: no such professional");
    }
    Ok(approved)
}

pub fn pending_professionals(conn: &Connection) -> Result<Vec<User>, CareError> {
    Ok(db::get_pending_professionals(conn)?)
}

/// Pending queue and platform totals. Requires a signed-in user of any role.
pub fn admin_overview(
    conn: &Connection,
    acting: Option<&ActingUser>,
) -> Result<AdminOverview, CareError> {
    acting.ok_or(CareError::Unauthenticated)?;
    Ok(AdminOverview {
        pending_professionals: db::get_pending_professionals(conn)?,
        total_users: db::count_entities(conn, EntityKind::User)?,
        total_appointments: db::count_entities(conn, EntityKind::Appointment)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;
    use crate::db::{get_user, insert_user};
    use crate::models::{NewUser, UserRole};

    #[test]
    fn approve_moves_professional_out_of_pending() {
        let conn = open_memory_database().unwrap();
        let prof = insert_user(&conn, &NewUser::new("Dr. Amara", "a@x.lr", "h", UserRole::Professional)).unwrap();
        assert_eq!(pending_professionals(&conn).unwrap().len(), 1);

        assert!(approve_professional(&conn, prof.id).unwrap());
        assert!(pending_professionals(&conn).unwrap().is_empty());
        assert!(get_user(&conn, prof.id).unwrap().unwrap().is_approved);
    }

    #[test]
    fn approving_twice_keeps_approved() {
        let conn = open_memory_database().unwrap();
        let prof = insert_user(&conn, &NewUser::new("Dr. Amara", "a@x.lr", "h", UserRole::Professional)).unwrap();
        approve_professional(&conn, prof.id).unwrap();
        approve_professional(&conn, prof.id).unwrap();
        assert!(get_user(&conn, prof.id).unwrap().unwrap().is_approved);
    }

    #[test]
    fn approving_unknown_id_is_noop() {
        let conn = open_memory_database().unwrap();
        assert!(!approve_professional(&conn, 4242).unwrap());
    }

    #[test]
    fn overview_requires_acting_user() {
        let conn = open_memory_database().unwrap();
        let patient = insert_user(&conn, &NewUser::new("Musu", "musu@x.lr", "h", UserRole::Patient)).unwrap();
        insert_user(&conn, &NewUser::new("Dr. Amara", "a@x.lr", "h", UserRole::Professional)).unwrap();

        assert!(matches!(admin_overview(&conn, None), Err(CareError::Unauthenticated)));

        let overview = admin_overview(&conn, Some(&ActingUser::from(&patient))).unwrap();
        assert_eq!(overview.total_users, 2);
        assert_eq!(overview.total_appointments, 0);
        assert_eq!(overview.pending_professionals.len(), 1);
    }
}
