//! Request audit logging.
//!
//! Logs every API request with a request id, method, path, acting user
//! and response status. Runs inside the identity resolver.

use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::api::types::Identity;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn log_access(req: Request<axum::body::Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let user_id = req
        .extensions()
        .get::<Identity>()
        .and_then(Identity::acting)
        .map(|a| a.user_id);

    let mut response = next.run(req).await;

    tracing::info!(
        %request_id,
        method,
        path,
        user_id,
        status = response.status().as_u16(),
        "API request"
    );
    if let Ok(val) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, val);
    }
    response
}
