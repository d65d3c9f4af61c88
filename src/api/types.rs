//! Shared types for the HTTP layer.

use std::sync::Arc;

use crate::api::error::ApiError;
use crate::core_state::CoreState;
use crate::session::{ActingUser, SessionEntry, DEFAULT_LANGUAGE};

// ═══════════════════════════════════════════════════════════
// API context: shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        Self { core }
    }
}

// ═══════════════════════════════════════════════════════════
// Identity: injected by the auth middleware on every request
// ═══════════════════════════════════════════════════════════

/// Caller identity. Anonymous when no valid bearer token was presented.
#[derive(Debug, Clone, Default)]
pub struct Identity {
    token: Option<String>,
    session: Option<SessionEntry>,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(token: String, session: SessionEntry) -> Self {
        Self {
            token: Some(token),
            session: Some(session),
        }
    }

    pub fn acting(&self) -> Option<&ActingUser> {
        self.session.as_ref().map(|s| &s.acting)
    }

    /// Session language, or English for anonymous callers.
    pub fn language(&self) -> &str {
        self.session
            .as_ref()
            .map_or(DEFAULT_LANGUAGE, |s| s.language.as_str())
    }

    /// Bearer token of an authenticated caller.
    pub fn require_token(&self) -> Result<&str, ApiError> {
        match (&self.token, &self.session) {
            (Some(token), Some(_)) => Ok(token.as_str()),
            _ => Err(ApiError::Unauthorized),
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
