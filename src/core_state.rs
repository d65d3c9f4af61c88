//! Shared application state for the HTTP layer.
//!
//! One SQLite connection behind a `Mutex` (never held across `.await`),
//! the bearer session table behind a `RwLock`, and the credential hasher.

use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use rusqlite::Connection;

use crate::config;
use crate::crypto::{CredentialVerifier, Pbkdf2Verifier};
use crate::db;
use crate::education::NphilSource;
use crate::error::CareError;
use crate::session::{ActingUser, SessionEntry, SessionStore};

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

pub struct CoreState {
    conn: Mutex<Connection>,
    sessions: RwLock<SessionStore>,
    verifier: Arc<dyn CredentialVerifier>,
    /// Live education importer behind `/education/nphil`.
    pub importer: NphilSource,
}

impl CoreState {
    pub fn new(
        conn: Connection,
        verifier: Arc<dyn CredentialVerifier>,
        importer: NphilSource,
        session_ttl: Duration,
    ) -> Self {
        Self {
            conn: Mutex::new(conn),
            sessions: RwLock::new(SessionStore::new(session_ttl)),
            verifier,
            importer,
        }
    }

    /// Production state: default PBKDF2 work factor and session lifetime.
    pub fn with_defaults(conn: Connection, importer: NphilSource) -> Self {
        Self::new(
            conn,
            Arc::new(Pbkdf2Verifier::default()),
            importer,
            Duration::from_secs(config::SESSION_TTL_SECS),
        )
    }

    /// Lock the shared connection.
    pub fn db(&self) -> Result<MutexGuard<'_, Connection>, CoreError> {
        self.conn.lock().map_err(|_| CoreError::LockPoisoned)
    }

    /// Shared handle for hashing on a blocking thread.
    pub fn verifier(&self) -> Arc<dyn CredentialVerifier> {
        Arc::clone(&self.verifier)
    }

    // ── Sessions ────────────────────────────────────────────

    pub fn read_sessions(&self) -> Result<RwLockReadGuard<'_, SessionStore>, CoreError> {
        self.sessions.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_sessions(&self) -> Result<RwLockWriteGuard<'_, SessionStore>, CoreError> {
        self.sessions.write().map_err(|_| CoreError::LockPoisoned)
    }

    /// Start a session and return its bearer token.
    pub fn issue_session(&self, acting: ActingUser) -> Result<String, CoreError> {
        let token = self.write_sessions()?.issue(acting);
        tracing::info!(user_id = acting.user_id, "Session issued");
        Ok(token)
    }

    pub fn resolve_session(&self, token: &str) -> Result<Option<SessionEntry>, CoreError> {
        Ok(self.read_sessions()?.resolve(token))
    }

    pub fn revoke_session(&self, token: &str) -> Result<bool, CoreError> {
        Ok(self.write_sessions()?.revoke(token))
    }

    pub fn set_session_language(&self, token: &str, language: &str) -> Result<bool, CoreError> {
        Ok(self.write_sessions()?.set_language(token, language))
    }
}

// ═══════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Database error: {0}")]
    Database(#[from] db::DatabaseError),
}

impl From<CoreError> for CareError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LockPoisoned => CareError::LockPoisoned,
            CoreError::Database(e) => e.into(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;

    /// In-memory state with a cheap hasher. The importer points at an unroutable address.
    pub(crate) fn test_state() -> CoreState {
        CoreState::new(
            open_memory_database().unwrap(),
            Arc::new(Pbkdf2Verifier::new(1_000)),
            NphilSource::new("http://127.0.0.1:9/").unwrap(),
            Duration::from_secs(60),
        )
    }

    #[test]
    fn session_lifecycle() {
        let state = test_state();
        let acting = ActingUser { user_id: 3 };
        let token = state.issue_session(acting).unwrap();

        assert_eq!(state.resolve_session(&token).unwrap().unwrap().acting, acting);
        assert!(state.set_session_language(&token, "bassa").unwrap());
        assert_eq!(state.resolve_session(&token).unwrap().unwrap().language, "bassa");
        assert!(state.revoke_session(&token).unwrap());
        assert!(state.resolve_session(&token).unwrap().is_none());
    }

    #[test]
    fn db_guard_reaches_migrated_schema() {
        let state = test_state();
        let conn = state.db().unwrap();
        assert_eq!(db::count_entities(&conn, crate::models::EntityKind::User).unwrap(), 0);
    }

    #[test]
    fn core_error_maps_to_care_error() {
        assert!(matches!(CareError::from(CoreError::LockPoisoned), CareError::LockPoisoned));
        let err = CoreError::Database(db::DatabaseError::ConstraintViolation("x".into()));
        assert!(matches!(CareError::from(err), CareError::ConstraintViolation(_)));
    }
}
