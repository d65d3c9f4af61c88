use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::UserRole;

/// Default rating assigned to every new account.
pub const DEFAULT_RATING: f64 = 5.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub age: Option<i64>,
    pub county: Option<String>,
    pub contact: Option<String>,
    pub gender: Option<String>,
    pub medical_history: Option<String>,
    pub specialty: Option<String>,
    pub license_info: Option<String>,
    pub availability: Option<String>,
    pub rating: f64,
    pub is_approved: bool,
    pub created_at: NaiveDateTime,
}

/// Fields supplied when creating a user row. The credential is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub age: Option<i64>,
    pub county: Option<String>,
    pub contact: Option<String>,
    pub gender: Option<String>,
    pub medical_history: Option<String>,
    pub specialty: Option<String>,
    pub license_info: Option<String>,
    pub availability: Option<String>,
    pub rating: Option<f64>,
}

impl NewUser {
    pub fn new(name: &str, email: &str, password_hash: &str, role: UserRole) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            role,
            age: None,
            county: None,
            contact: None,
            gender: None,
            medical_history: None,
            specialty: None,
            license_info: None,
            availability: None,
            rating: None,
        }
    }
}
