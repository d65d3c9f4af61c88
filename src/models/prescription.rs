use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub id: i64,
    pub patient_id: i64,
    pub professional_id: i64,
    pub medication: String,
    pub dosage: Option<String>,
    pub instructions: Option<String>,
    pub prescribed_date: NaiveDateTime,
}

#[derive(Debug, Clone, Default)]
pub struct NewPrescription {
    pub patient_id: i64,
    pub professional_id: i64,
    pub medication: String,
    pub dosage: Option<String>,
    pub instructions: Option<String>,
}
