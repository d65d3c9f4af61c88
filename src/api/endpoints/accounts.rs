//! Account endpoints.
//!
//! - `POST /api/register`: create a patient or professional account
//! - `POST /api/login`: verify credentials, issue a bearer token
//! - `POST /api/logout`: revoke the caller's token

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::accounts::{self, RegistrationRequest};
use crate::api::error::ApiError;
use crate::api::types::{ApiContext, Identity};
use crate::models::User;
use crate::session::ActingUser;

/// `POST /api/register`
pub async fn register(
    State(ctx): State<ApiContext>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(request) = payload?;
    let verifier = ctx.core.verifier();
    let new_user =
        tokio::task::spawn_blocking(move || accounts::prepare_registration(verifier.as_ref(), &request))
            .await??;

    let conn = ctx.core.db()?;
    let user = accounts::create_account(&conn, &new_user)?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// `POST /api/login`
pub async fn login(
    State(ctx): State<ApiContext>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload?;
    let account = {
        let conn = ctx.core.db()?;
        accounts::find_account(&conn, &request.email)?
    };

    // Verification runs after the connection lock is released.
    let verifier = ctx.core.verifier();
    let user = tokio::task::spawn_blocking(move || {
        accounts::check_password(verifier.as_ref(), account, &request.password)
    })
    .await?;
    let Some(user) = user else {
        tracing::info!("Login rejected");
        return Err(ApiError::InvalidCredentials);
    };

    let token = ctx.core.issue_session(ActingUser::from(&user))?;
    Ok(Json(LoginResponse { token, user }))
}

/// `POST /api/logout`
pub async fn logout(
    State(ctx): State<ApiContext>,
    Extension(identity): Extension<Identity>,
) -> Result<StatusCode, ApiError> {
    let token = identity.require_token()?;
    ctx.core.revoke_session(token)?;
    Ok(StatusCode::NO_CONTENT)
}
