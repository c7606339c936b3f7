use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Local;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{CreatePatientRequest, PatientSearchQuery, PatientView, UpdatePatientRequest};
use crate::services::PatientService;

#[axum::debug_handler]
pub async fn search_patients(
    State(service): State<Arc<PatientService>>,
    Query(query): Query<PatientSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let today = Local::now().date_naive();
    let patients: Vec<PatientView> = service
        .search(&query)
        .await?
        .into_iter()
        .map(|patient| PatientView::new(patient, today))
        .collect();

    Ok(Json(json!({
        "patients": patients,
        "total": patients.len()
    })))
}

#[axum::debug_handler]
pub async fn create_patient(
    State(service): State<Arc<PatientService>>,
    Json(request): Json<CreatePatientRequest>,
) -> Result<Json<PatientView>, AppError> {
    let patient = service.register(request).await?;
    Ok(Json(PatientView::new(patient, Local::now().date_naive())))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(service): State<Arc<PatientService>>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<PatientView>, AppError> {
    let patient = service.get(patient_id).await?;
    Ok(Json(PatientView::new(patient, Local::now().date_naive())))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(service): State<Arc<PatientService>>,
    Path(patient_id): Path<Uuid>,
    Json(request): Json<UpdatePatientRequest>,
) -> Result<Json<PatientView>, AppError> {
    let patient = service.update(patient_id, request).await?;
    Ok(Json(PatientView::new(patient, Local::now().date_naive())))
}
