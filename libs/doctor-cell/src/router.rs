use std::sync::Arc;

use axum::{
    middleware,
    routing::get,
    Router,
};

use shared_database::SessionStore;
use shared_utils::extractor::session_middleware;

use crate::handlers;
use crate::services::DoctorService;

pub fn doctor_routes(service: Arc<DoctorService>, sessions: Arc<dyn SessionStore>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors).post(handlers::create_doctor))
        .route("/{doctor_id}", get(handlers::get_doctor).put(handlers::update_doctor))
        .layer(middleware::from_fn_with_state(sessions, session_middleware))
        .with_state(service)
}
