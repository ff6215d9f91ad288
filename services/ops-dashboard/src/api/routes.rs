//! API 路由

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit, routing::get};

use crate::application::DashboardHandler;

use super::handlers::{dashboard, dashboard_upload, date_range};
use super::page::index;

pub fn dashboard_routes(handler: Arc<DashboardHandler>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/date-range", get(date_range))
        .route("/api/dashboard", get(dashboard).post(dashboard_upload))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(handler)
}
