use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_database::SessionStore;
use shared_utils::extractor::session_middleware;

use crate::handlers;
use crate::services::DocumentCatalog;

pub fn document_routes(catalog: Arc<DocumentCatalog>, sessions: Arc<dyn SessionStore>) -> Router {
    Router::new()
        .route("/", get(handlers::list_documents))
        .route("/{document_id}", get(handlers::get_document))
        .layer(middleware::from_fn_with_state(sessions, session_middleware))
        .with_state(catalog)
}
