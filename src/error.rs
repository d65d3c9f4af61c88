//! Domain error taxonomy shared by the workflow modules.

use thiserror::Error;

use crate::db::DatabaseError;

#[derive(Error, Debug)]
pub enum CareError {
    #[error("No acting user for this operation")]
    Unauthenticated,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("Database error: {0}")]
    Database(DatabaseError),

    #[error("State lock poisoned")]
    LockPoisoned,
}

impl CareError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CareError::InvalidInput(message.into())
    }
}

impl From<DatabaseError> for CareError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::ConstraintViolation(detail) => CareError::ConstraintViolation(detail),
            DatabaseError::NotFound { entity_type, id } => CareError::NotFound {
                entity: entity_type,
                id,
            },
            other => CareError::Database(other),
        }
    }
}
