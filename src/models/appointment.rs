use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::{AppointmentStatus, AppointmentType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub professional_id: i64,
    pub appointment_date: NaiveDateTime,
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_id: i64,
    pub professional_id: i64,
    pub appointment_date: NaiveDateTime,
    pub appointment_type: AppointmentType,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
}
