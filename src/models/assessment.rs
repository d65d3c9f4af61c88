use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Self-reported mental health check-in. Scores are nominally 1-10 but stored as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentalHealthAssessment {
    pub id: i64,
    pub user_id: i64,
    pub mood_score: Option<i64>,
    pub anxiety_level: Option<i64>,
    pub depression_indicators: Vec<String>,
    pub assessment_date: NaiveDateTime,
}

#[derive(Debug, Clone, Default)]
pub struct NewAssessment {
    pub user_id: i64,
    pub mood_score: Option<i64>,
    pub anxiety_level: Option<i64>,
    pub depression_indicators: Vec<String>,
}
