//! Patient and professional registration, credential checks.

use std::str::FromStr;

use rusqlite::Connection;
use serde::Deserialize;

use crate::crypto::CredentialVerifier;
use crate::db;
use crate::error::CareError;
use crate::models::{NewUser, User, UserRole};

/// Registration payload. `user_type` is accepted as an alias of `role`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(alias = "user_type")]
    pub role: String,
    pub age: Option<i64>,
    pub county: Option<String>,
    pub contact: Option<String>,
    pub gender: Option<String>,
    pub medical_history: Option<String>,
    pub specialty: Option<String>,
    pub license_info: Option<String>,
    pub availability: Option<String>,
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, CareError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CareError::invalid(format!("{field} is required")));
    }
    Ok(trimmed)
}

/// Validate a registration and hash its password.
///
/// Hashing is CPU-bound. On the async runtime run this on a blocking thread
/// and take the database lock only for `create_account`.
pub fn prepare_registration(
    verifier: &dyn CredentialVerifier,
    request: &RegistrationRequest,
) -> Result<NewUser, CareError> {
    let name = required(&request.name, "name")?;
    let email = required(&request.email, "email")?;
    if request.password.is_empty() {
        return Err(CareError::invalid("password is required"));
    }
    let role = UserRole::from_str(request.role.trim())
        .map_err(|_| CareError::invalid(format!("unknown role: {}", request.role)))?;

    Ok(NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: verifier.hash(&request.password),
        role,
        age: request.age,
        county: request.county.clone(),
        contact: request.contact.clone(),
        gender: request.gender.clone(),
        medical_history: Some(request.medical_history.clone().unwrap_or_default()),
        specialty: Some(request.specialty.clone().unwrap_or_default()),
        license_info: Some(request.license_info.clone().unwrap_or_default()),
        availability: Some(request.availability.clone().unwrap_or_default()),
        rating: None,
    })
}

/// Store a prepared account. Patients are usable immediately; professionals wait for approval.
pub fn create_account(conn: &Connection, new_user: &NewUser) -> Result<User, CareError> {
    let user = db::insert_user(conn, new_user)?;
    tracing::info!(user_id = user.id, role = %user.role, "User registered");
    Ok(user)
}

/// Account registered under `email`, if any.
pub fn find_account(conn: &Connection, email: &str) -> Result<Option<User>, CareError> {
    Ok(db::get_user_by_email(conn, email.trim())?)
}

/// Check a password against a looked-up account. Unknown account and wrong password both yield `None`.
pub fn check_password(
    verifier: &dyn CredentialVerifier,
    account: Option<User>,
    password: &str,
) -> Option<User> {
    account.filter(|user| verifier.verify(password, &user.password_hash))
}
