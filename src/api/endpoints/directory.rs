//! Directory endpoints.
//!
//! - `GET /api/professionals`: approved professionals plus filter options
//! - `POST /api/professionals/:id/approve`: approve a pending professional
//! - `GET /api/facilities`: facilities plus filter options

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::approval;
use crate::config::LIBERIAN_COUNTIES;
use crate::directory;
use crate::models::{FacilityFilter, HealthFacility, ProfessionalFilter, User};

#[derive(Serialize)]
pub struct ProfessionalsResponse {
    pub professionals: Vec<User>,
    pub specializations: Vec<String>,
    pub counties: &'static [&'static str],
}

/// `GET /api/professionals?county&specialty&name&profession`
pub async fn professionals(
    State(ctx): State<ApiContext>,
    Query(filter): Query<ProfessionalFilter>,
) -> Result<Json<ProfessionalsResponse>, ApiError> {
    let conn = ctx.core.db()?;
    Ok(Json(ProfessionalsResponse {
        professionals: directory::find_professionals(&conn, &filter)?,
        specializations: directory::distinct_specialties(&conn)?,
        counties: LIBERIAN_COUNTIES,
    }))
}

#[derive(Serialize)]
pub struct ApproveResponse {
    pub approved: bool,
}

/// `POST /api/professionals/:id/approve`: open to any caller.
pub async fn approve(
    State(ctx): State<ApiContext>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApproveResponse>, ApiError> {
    let Path(professional_id) = id?;
    let conn = ctx.core.db()?;
    let approved = approval::approve_professional(&conn, professional_id)?;
    Ok(Json(ApproveResponse { approved }))
}

#[derive(Serialize)]
pub struct FacilitiesResponse {
    pub facilities: Vec<HealthFacility>,
    pub facility_types: Vec<String>,
    pub counties: &'static [&'static str],
}

/// `GET /api/facilities?county&facility_type&service&name`
pub async fn facilities(
    State(ctx): State<ApiContext>,
    Query(filter): Query<FacilityFilter>,
) -> Result<Json<FacilitiesResponse>, ApiError> {
    let conn = ctx.core.db()?;
    Ok(Json(FacilitiesResponse {
        facilities: directory::find_facilities(&conn, &filter)?,
        facility_types: directory::distinct_facility_types(&conn)?,
        counties: LIBERIAN_COUNTIES,
    }))
}
