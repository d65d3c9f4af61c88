//! Appointment endpoints.
//!
//! - `POST /api/appointments`: book for the signed-in patient
//! - `GET /api/appointments`: the signed-in patient's appointments

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, Identity};
use crate::booking::{self, BookingRequest};
use crate::models::Appointment;
use crate::records;

/// `POST /api/appointments`
pub async fn book(
    State(ctx): State<ApiContext>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let Json(request) = payload?;
    let conn = ctx.core.db()?;
    let appointment = booking::book_appointment(&conn, identity.acting(), &request)?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

#[derive(Serialize)]
pub struct AppointmentsResponse {
    pub appointments: Vec<Appointment>,
}

/// `GET /api/appointments`
pub async fn list(
    State(ctx): State<ApiContext>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<AppointmentsResponse>, ApiError> {
    let conn = ctx.core.db()?;
    let appointments = records::list_appointments(&conn, identity.acting())?;
    Ok(Json(AppointmentsResponse { appointments }))
}
