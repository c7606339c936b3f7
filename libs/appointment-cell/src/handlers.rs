use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_utils::format::format_date;

use crate::models::{
    AppointmentQuery, AppointmentView, BookingOptions, CreateAppointmentRequest, DateQuery,
    StatusSummary, UpdateAppointmentRequest,
};
use crate::services::AppointmentService;

fn day_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(service): State<Arc<AppointmentService>>,
    Query(query): Query<AppointmentQuery>,
) -> Result<Json<Value>, AppError> {
    let date = day_or_today(query.date);
    let appointments: Vec<AppointmentView> = service
        .list(date, &query)
        .await?
        .into_iter()
        .map(AppointmentView::from)
        .collect();

    Ok(Json(json!({
        "date": date,
        "appointments": appointments,
        "total": appointments.len()
    })))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(service): State<Arc<AppointmentService>>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<Json<AppointmentView>, AppError> {
    let appointment = service.book(request, Local::now().date_naive()).await?;
    Ok(Json(appointment.into()))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(service): State<Arc<AppointmentService>>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<AppointmentView>, AppError> {
    let appointment = service.get(appointment_id).await?;
    Ok(Json(appointment.into()))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(service): State<Arc<AppointmentService>>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> Result<Json<AppointmentView>, AppError> {
    let appointment = service.update(appointment_id, request).await?;
    Ok(Json(appointment.into()))
}

#[axum::debug_handler]
pub async fn get_schedule(
    State(service): State<Arc<AppointmentService>>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Value>, AppError> {
    let date = day_or_today(query.date);
    let entries = service.schedule(date).await?;
    let available = entries.iter().filter(|entry| entry.available).count();

    Ok(Json(json!({
        "date": date,
        "date_display": format_date(date),
        "slots": entries,
        "available": available
    })))
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(service): State<Arc<AppointmentService>>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Value>, AppError> {
    let date = day_or_today(query.date);
    let slots = service.available(date).await?;

    Ok(Json(json!({
        "date": date,
        "slots": slots
    })))
}

#[axum::debug_handler]
pub async fn get_booking_options(
    State(service): State<Arc<AppointmentService>>,
    Query(query): Query<DateQuery>,
) -> Result<Json<BookingOptions>, AppError> {
    Ok(Json(service.options(day_or_today(query.date)).await?))
}

#[axum::debug_handler]
pub async fn get_status_summary(
    State(service): State<Arc<AppointmentService>>,
    Query(query): Query<DateQuery>,
) -> Result<Json<StatusSummary>, AppError> {
    Ok(Json(service.summary(day_or_today(query.date)).await?))
}
