//! HTTP API.
//!
//! JSON endpoints nested under `/api/`, wrapped by an identity resolver
//! and an audit logger. `api_router()` returns a `Router` that can be
//! mounted on any axum server.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::serve;
pub use types::ApiContext;
