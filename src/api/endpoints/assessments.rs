//! `POST /api/assessments`: record a mental health check-in.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, Identity};
use crate::models::MentalHealthAssessment;
use crate::records::{self, AssessmentRequest};

pub async fn record(
    State(ctx): State<ApiContext>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MentalHealthAssessment>), ApiError> {
    let Json(request) = payload?;
    let conn = ctx.core.db()?;
    let assessment = records::record_assessment(&conn, identity.acting(), &request)?;
    Ok((StatusCode::CREATED, Json(assessment)))
}
