use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{enum_column, now_utc};
use crate::db::DatabaseError;
use crate::models::*;

const APPOINTMENT_COLUMNS: &str = "id, patient_id, professional_id, appointment_date,
    appointment_type, status, notes, created_at";

fn appointment_from_row(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        professional_id: row.get(2)?,
        appointment_date: row.get(3)?,
        appointment_type: enum_column(row, 4)?,
        status: enum_column(row, 5)?,
        notes: row.get(6)?,
        created_at: row.get(7)?,
    })
}

pub fn insert_appointment(
    conn: &Connection,
    appt: &NewAppointment,
) -> Result<Appointment, DatabaseError> {
    let status = appt.status.unwrap_or(AppointmentStatus::Scheduled);
    let created_at = now_utc();

    conn.execute(
        "INSERT INTO appointments (patient_id, professional_id, appointment_date,
         appointment_type, status, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            appt.patient_id,
            appt.professional_id,
            appt.appointment_date,
            appt.appointment_type.as_str(),
            status.as_str(),
            appt.notes,
            created_at,
        ],
    )?;

    Ok(Appointment {
        id: conn.last_insert_rowid(),
        patient_id: appt.patient_id,
        professional_id: appt.professional_id,
        appointment_date: appt.appointment_date,
        appointment_type: appt.appointment_type,
        status,
        notes: appt.notes.clone(),
        created_at,
    })
}

pub fn get_appointment(conn: &Connection, id: i64) -> Result<Option<Appointment>, DatabaseError> {
    let sql = format!("SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = ?1");
    let appt = conn.query_row(&sql, params![id], appointment_from_row).optional()?;
    Ok(appt)
}

/// Appointments where the user is the patient, in storage order.
pub fn list_appointments_for_patient(
    conn: &Connection,
    patient_id: i64,
) -> Result<Vec<Appointment>, DatabaseError> {
    let sql = format!(
        "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE patient_id = ?1 ORDER BY id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![patient_id], appointment_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
