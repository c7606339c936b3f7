use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use shared_models::error::AppError;

use crate::models::{DocumentCatalogView, DocumentView};
use crate::services::DocumentCatalog;

pub async fn list_documents(
    State(catalog): State<Arc<DocumentCatalog>>,
) -> Result<Json<DocumentCatalogView>, AppError> {
    Ok(Json(catalog.view()))
}

pub async fn get_document(
    State(catalog): State<Arc<DocumentCatalog>>,
    Path(document_id): Path<String>,
) -> Result<Json<DocumentView>, AppError> {
    let entry = catalog.get(&document_id)?;
    Ok(Json(entry.into()))
}
