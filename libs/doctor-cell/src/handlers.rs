use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{CreateDoctorRequest, DoctorSearchQuery, DoctorView, UpdateDoctorRequest};
use crate::services::DoctorService;

#[axum::debug_handler]
pub async fn list_doctors(
    State(service): State<Arc<DoctorService>>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let doctors: Vec<DoctorView> = service
        .list(&query)
        .await?
        .into_iter()
        .map(DoctorView::from)
        .collect();

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(service): State<Arc<DoctorService>>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<DoctorView>, AppError> {
    let doctor = service.get(doctor_id).await?;
    Ok(Json(doctor.into()))
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(service): State<Arc<DoctorService>>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<Json<DoctorView>, AppError> {
    let doctor = service.create(request).await?;
    Ok(Json(doctor.into()))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(service): State<Arc<DoctorService>>,
    Path(doctor_id): Path<Uuid>,
    Json(request): Json<UpdateDoctorRequest>,
) -> Result<Json<DoctorView>, AppError> {
    let doctor = service.update(doctor_id, request).await?;
    Ok(Json(doctor.into()))
}
