//! Bearer token identity middleware.
//!
//! Extracts `Authorization: Bearer <token>` and resolves it against the
//! session table. Every request gets an `Identity` extension; whether a
//! route needs a signed-in user is decided by the workflow it calls.

use axum::http::{header, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::api::error::ApiError;
use crate::api::types::{bearer_token, ApiContext, Identity};

pub async fn resolve_identity(req: Request<axum::body::Body>, next: Next) -> Response {
    match resolve_identity_inner(req, next).await {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

async fn resolve_identity_inner(
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let ctx: ApiContext = req
        .extensions()
        .get::<ApiContext>()
        .cloned()
        .ok_or(ApiError::Internal("missing API context".into()))?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_string);

    // Session lock released before the handler runs.
    let identity = match token {
        Some(token) => match ctx.core.resolve_session(&token)? {
            Some(session) => Identity::authenticated(token, session),
            None => Identity::anonymous(),
        },
        None => Identity::anonymous(),
    };
    let authenticated = identity.acting().is_some();
    req.extensions_mut().insert(identity);

    let mut response = next.run(req).await;
    if authenticated {
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }
    Ok(response)
}
