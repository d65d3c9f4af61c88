use rusqlite::{params, Connection, OptionalExtension, Row};

use super::now_utc;
use crate::db::DatabaseError;
use crate::models::*;

const ASSESSMENT_COLUMNS: &str =
    "id, user_id, mood_score, anxiety_level, depression_indicators, assessment_date";

fn assessment_from_row(row: &Row<'_>) -> rusqlite::Result<MentalHealthAssessment> {
    let raw_indicators: String = row.get(4)?;
    let depression_indicators = serde_json::from_str(&raw_indicators).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(MentalHealthAssessment {
        id: row.get(0)?,
        user_id: row.get(1)?,
        mood_score: row.get(2)?,
        anxiety_level: row.get(3)?,
        depression_indicators,
        assessment_date: row.get(5)?,
    })
}

/// Append an assessment. The indicator list is stored as a JSON array.
pub fn insert_assessment(
    conn: &Connection,
    assessment: &NewAssessment,
) -> Result<MentalHealthAssessment, DatabaseError> {
    let indicators_json = serde_json::to_string(&assessment.depression_indicators)?;
    let assessment_date = now_utc();

    conn.execute(
        "INSERT INTO mental_health_assessments
         (user_id, mood_score, anxiety_level, depression_indicators, assessment_date)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            assessment.user_id,
            assessment.mood_score,
            assessment.anxiety_level,
            indicators_json,
            assessment_date,
        ],
    )?;

    Ok(MentalHealthAssessment {
        id: conn.last_insert_rowid(),
        user_id: assessment.user_id,
        mood_score: assessment.mood_score,
        anxiety_level: assessment.anxiety_level,
        depression_indicators: assessment.depression_indicators.clone(),
        assessment_date,
    })
}

pub fn get_assessment(
    conn: &Connection,
    id: i64,
) -> Result<Option<MentalHealthAssessment>, DatabaseError> {
    let sql = format!("SELECT {ASSESSMENT_COLUMNS} FROM mental_health_assessments WHERE id = ?1");
    let assessment = conn.query_row(&sql, params![id], assessment_from_row).optional()?;
    Ok(assessment)
}

pub fn list_assessments_for_user(
    conn: &Connection,
    user_id: i64,
) -> Result<Vec<MentalHealthAssessment>, DatabaseError> {
    let sql = format!(
        "SELECT {ASSESSMENT_COLUMNS} FROM mental_health_assessments WHERE user_id = ?1 ORDER BY id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![user_id], assessment_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
