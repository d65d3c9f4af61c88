use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthFacility {
    pub id: i64,
    pub name: String,
    pub county: String,
    pub facility_type: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub services: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct NewFacility {
    pub name: String,
    pub county: String,
    pub facility_type: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub services: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
