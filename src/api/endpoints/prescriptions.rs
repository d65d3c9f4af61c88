//! `GET /api/prescriptions`: the signed-in patient's prescriptions.

use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, Identity};
use crate::models::Prescription;
use crate::records;

#[derive(Serialize)]
pub struct PrescriptionsResponse {
    pub prescriptions: Vec<Prescription>,
}

pub async fn list(
    State(ctx): State<ApiContext>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<PrescriptionsResponse>, ApiError> {
    let conn = ctx.core.db()?;
    let prescriptions = records::list_prescriptions(&conn, identity.acting())?;
    Ok(Json(PrescriptionsResponse { prescriptions }))
}
