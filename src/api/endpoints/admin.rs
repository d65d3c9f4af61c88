//! `GET /api/admin`: pending professionals and platform totals.

use axum::extract::State;
use axum::{Extension, Json};

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, Identity};
use crate::approval::{self, AdminOverview};

pub async fn overview(
    State(ctx): State<ApiContext>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<AdminOverview>, ApiError> {
    let conn = ctx.core.db()?;
    Ok(Json(approval::admin_overview(&conn, identity.acting())?))
}
