use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_database::SessionStore;
use shared_utils::extractor::session_middleware;

use crate::handlers::get_dashboard;
use crate::services::DashboardService;

pub fn dashboard_routes(service: Arc<DashboardService>, sessions: Arc<dyn SessionStore>) -> Router {
    Router::new()
        .route("/", get(get_dashboard))
        .layer(middleware::from_fn_with_state(sessions, session_middleware))
        .with_state(service)
}
