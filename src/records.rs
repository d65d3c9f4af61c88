//! Assessment recording and per-patient record listings.

use rusqlite::Connection;
use serde::Deserialize;

use crate::db;
use crate::error::CareError;
use crate::models::{Appointment, MentalHealthAssessment, NewAssessment, Prescription};
use crate::session::ActingUser;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentRequest {
    pub mood_score: Option<i64>,
    pub anxiety_level: Option<i64>,
    #[serde(default)]
    pub depression_indicators: Vec<String>,
}

fn require(acting: Option<&ActingUser>) -> Result<&ActingUser, CareError> {
    acting.ok_or(CareError::Unauthenticated)
}

/// Append a mental health assessment for the acting user. Scores are stored unvalidated.
pub fn record_assessment(
    conn: &Connection,
    acting: Option<&ActingUser>,
    request: &AssessmentRequest,
) -> Result<MentalHealthAssessment, CareError> {
    let acting = require(acting)?;
    let assessment = db::insert_assessment(conn, &NewAssessment {
        user_id: acting.user_id,
        mood_score: request.mood_score,
        anxiety_level: request.anxiety_level,
        depression_indicators: request.depression_indicators.clone(),
    })?;
    tracing::info!(assessment_id = assessment.id, user_id = acting.user_id, "Assessment recorded");
    Ok(assessment)
}

pub fn list_assessments(
    conn: &Connection,
    acting: Option<&ActingUser>,
) -> Result<Vec<MentalHealthAssessment>, CareError> {
    let acting = require(acting)?;
    Ok(db::list_assessments_for_user(conn, acting.user_id)?)
}

/// Prescriptions where the acting user is the patient.
pub fn list_prescriptions(
    conn: &Connection,
    acting: Option<&ActingUser>,
) -> Result<Vec<Prescription>, CareError> {
    let acting = require(acting)?;
    Ok(db::list_prescriptions_for_patient(conn, acting.user_id)?)
}

/// Appointments where the acting user is the patient.
pub fn list_appointments(
    conn: &Connection,
    acting: Option<&ActingUser>,
) -> Result<Vec<Appointment>, CareError> {
    let acting = require(acting)?;
    Ok(db::list_appointments_for_patient(conn, acting.user_id)?)
}
