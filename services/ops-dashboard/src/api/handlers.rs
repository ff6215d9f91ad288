use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, Query, State, rejection::QueryRejection},
};
use opsdash_errors::{AppError, AppResult};

use crate::application::{DashboardFilter, DashboardHandler, ViewModel};
use crate::domain::DateRange;

use super::upload::read_upload;

type HandlerState = State<Arc<DashboardHandler>>;

/// GET /api/date-range
pub async fn date_range(State(handler): HandlerState) -> AppResult<Json<DateRange>> {
    Ok(Json(handler.sample_date_range()?))
}

/// GET /api/dashboard?start=&end=
pub async fn dashboard(
    State(handler): HandlerState,
    query: Result<Query<DashboardFilter>, QueryRejection>,
) -> AppResult<Json<ViewModel>> {
    let Query(filter) = query.map_err(|e| AppError::validation(e.body_text()))?;
    Ok(Json(handler.dashboard(&filter)?))
}

/// POST /api/dashboard (multipart)
pub async fn dashboard_upload(
    State(handler): HandlerState,
    multipart: Multipart,
) -> AppResult<Json<ViewModel>> {
    let (upload, filter) = read_upload(multipart).await?;
    Ok(Json(handler.dashboard_with_upload(upload, &filter)?))
}
