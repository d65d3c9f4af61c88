use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Language stored when an article does not name one.
pub const DEFAULT_EDUCATION_LANGUAGE: &str = "English";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthEducation {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub language: String,
    pub content_type: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default)]
pub struct NewEducation {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub language: Option<String>,
    pub content_type: Option<String>,
}
