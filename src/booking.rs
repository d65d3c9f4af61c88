//! Appointment booking for the acting patient.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::Connection;
use serde::Deserialize;

use crate::db;
use crate::error::CareError;
use crate::models::{Appointment, AppointmentType, NewAppointment, UserRole};
use crate::session::ActingUser;

#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub professional_id: i64,
    /// ISO 8601 date or date-time.
    pub appointment_date: String,
    pub appointment_type: String,
    pub notes: Option<String>,
}

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO 8601 timestamp. Offsets are normalised to UTC; date-only input means midnight.
/// No range check: past dates are accepted.
pub fn parse_appointment_date(raw: &str) -> Result<NaiveDateTime, CareError> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.naive_utc());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(CareError::invalid(format!("unparsable appointment date: {raw}")))
}

/// Book an appointment with an approved professional on behalf of the acting user.
///
/// The professional is checked before insert; an unknown, pending or
/// non-professional id is reported as `NotFound`.
pub fn book_appointment(
    conn: &Connection,
    acting: Option<&ActingUser>,
    request: &BookingRequest,
) -> Result<Appointment, CareError> {
    let acting = acting.ok_or(CareError::Unauthenticated)?;

    let appointment_date = parse_appointment_date(&request.appointment_date)?;
    let appointment_type = AppointmentType::from_str(request.appointment_type.trim()).map_err(|_| {
        CareError::invalid(format!("unknown appointment type: {}", request.appointment_type))
    })?;

    let bookable = db::get_user(conn, request.professional_id)?
        .is_some_and(|u| u.role == UserRole::Professional && u.is_approved);
    if !bookable {
        return Err(CareError::NotFound {
            entity: "professional".into(),
            id: request.professional_id.to_string(),
        });
    }

    let appointment = db::insert_appointment(conn, &NewAppointment {
        patient_id: acting.user_id,
        professional_id: request.professional_id,
        appointment_date,
        appointment_type,
        status: None,
        notes: Some(request.notes.clone().unwrap_or_default()),
    })?;

    tracing::info!(
        appointment_id = appointment.id,
        patient_id = appointment.patient_id,
        professional_id = appointment.professional_id,
        "Appointment booked"
    );
    Ok(appointment)
}
