use std::sync::Arc;

use axum::{
    extract::{Extension, Query, State},
    Json,
};
use chrono::Local;

use appointment_cell::DateQuery;
use shared_models::auth::Session;
use shared_models::error::AppError;

use crate::models::DashboardSummary;
use crate::services::DashboardService;

/// Dashboard for `?date=` or, by default, the server's local date.
#[axum::debug_handler]
pub async fn get_dashboard(
    State(service): State<Arc<DashboardService>>,
    Extension(session): Extension<Session>,
    Query(query): Query<DateQuery>,
) -> Result<Json<DashboardSummary>, AppError> {
    let today = query.date.unwrap_or_else(|| Local::now().date_naive());
    let summary = service.summary(session.user, today).await?;

    Ok(Json(summary))
}
