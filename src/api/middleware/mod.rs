//! API middleware stack.
//!
//! Execution order (outermost → innermost):
//! 1. Identity resolver: bearer token to session, anonymous otherwise
//! 2. Audit logger: logs after identity is known

pub mod audit;
pub mod auth;
