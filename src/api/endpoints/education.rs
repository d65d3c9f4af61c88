//! Education endpoints.
//!
//! - `GET /api/education`: stored articles by category and language
//! - `GET /api/education/nphil`: live import, not stored

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::education::{self, EducationSource, ScrapedArticle};
use crate::models::{EducationFilter, HealthEducation, DEFAULT_EDUCATION_LANGUAGE};

#[derive(Serialize)]
pub struct EducationResponse {
    pub articles: Vec<HealthEducation>,
}

/// `GET /api/education?category&language`: language defaults to English.
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(mut filter): Query<EducationFilter>,
) -> Result<Json<EducationResponse>, ApiError> {
    if filter.language.as_deref().map_or(true, str::is_empty) {
        filter.language = Some(DEFAULT_EDUCATION_LANGUAGE.to_string());
    }
    let conn = ctx.core.db()?;
    let articles = education::list_education(&conn, &filter)?;
    Ok(Json(EducationResponse { articles }))
}

#[derive(Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<ScrapedArticle>,
}

/// `GET /api/education/nphil`
pub async fn nphil(State(ctx): State<ApiContext>) -> Json<ImportResponse> {
    let data = ctx.core.importer.fetch().await;
    Json(ImportResponse {
        success: true,
        count: data.len(),
        data,
    })
}
