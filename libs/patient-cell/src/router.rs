use std::sync::Arc;
use axum::{middleware, routing::get, Router};
use shared_database::SessionStore;
use shared_utils::extractor::session_middleware;

use crate::handlers::*;
use crate::services::PatientService;

pub fn create_patient_router(service: Arc<PatientService>, sessions: Arc<dyn SessionStore>) -> Router {
    Router::new()
        .route("/", get(search_patients).post(create_patient))
        .route("/{id}", get(get_patient).put(update_patient))
        .layer(middleware::from_fn_with_state(sessions, session_middleware))
        .with_state(service)
}
