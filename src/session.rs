//! Acting-user sessions.
//!
//! Login issues an opaque bearer token; only its SHA-256 hash is kept.
//! Each session carries the acting user and the preferred UI language,
//! which replaces any process-wide "current user" state.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::models::User;

/// Language used until a session picks another one.
pub const DEFAULT_LANGUAGE: &str = "english";

/// Identity under which a mutating operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActingUser {
    pub user_id: i64,
}

impl From<&User> for ActingUser {
    fn from(user: &User) -> Self {
        Self { user_id: user.id }
    }
}

#[derive(Debug, Clone)]
pub struct SessionEntry {
    pub acting: ActingUser,
    pub language: String,
    issued_at: Instant,
}

/// Hash a bearer token string using SHA-256.
pub fn hash_token(token: &str) -> [u8; 32] {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().into()
}

/// Generate a random bearer token (URL-safe base64, 32 bytes of entropy).
pub fn generate_token() -> String {
    use base64::Engine;
    let bytes: [u8; 32] = rand::random();
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// In-memory token → session map with a fixed lifetime per session.
pub struct SessionStore {
    sessions: HashMap<[u8; 32], SessionEntry>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
        }
    }

    /// Start a session for the user and return the bearer token.
    pub fn issue(&mut self, acting: ActingUser) -> String {
        self.purge_expired();
        let token = generate_token();
        self.sessions.insert(
            hash_token(&token),
            SessionEntry {
                acting,
                language: DEFAULT_LANGUAGE.to_string(),
                issued_at: Instant::now(),
            },
        );
        token
    }

    /// Look up a live session. Expired sessions resolve to `None`.
    pub fn resolve(&self, token: &str) -> Option<SessionEntry> {
        self.sessions
            .get(&hash_token(token))
            .filter(|entry| entry.issued_at.elapsed() < self.ttl)
            .cloned()
    }

    /// Change the session language. Returns `false` for unknown tokens.
    pub fn set_language(&mut self, token: &str, language: &str) -> bool {
        match self.sessions.get_mut(&hash_token(token)) {
            Some(entry) => {
                entry.language = language.to_string();
                true
            }
            None => false,
        }
    }

    pub fn revoke(&mut self, token: &str) -> bool {
        self.sessions.remove(&hash_token(token)).is_some()
    }

    pub fn purge_expired(&mut self) {
        let ttl = self.ttl;
        self.sessions.retain(|_, entry| entry.issued_at.elapsed() < ttl);
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
