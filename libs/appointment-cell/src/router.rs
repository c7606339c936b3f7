use std::sync::Arc;

use axum::{
    middleware,
    routing::get,
    Router,
};

use shared_database::SessionStore;
use shared_utils::extractor::session_middleware;

use crate::handlers;
use crate::services::AppointmentService;

pub fn appointment_routes(service: Arc<AppointmentService>, sessions: Arc<dyn SessionStore>) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments).post(handlers::book_appointment))
        .route("/schedule", get(handlers::get_schedule))
        .route("/available-slots", get(handlers::get_available_slots))
        .route("/options", get(handlers::get_booking_options))
        .route("/summary", get(handlers::get_status_summary))
        .route("/{appointment_id}", get(handlers::get_appointment).put(handlers::update_appointment))
        .layer(middleware::from_fn_with_state(sessions, session_middleware))
        .with_state(service)
}
