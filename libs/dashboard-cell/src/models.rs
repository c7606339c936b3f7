use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use appointment_cell::{AppointmentError, AppointmentStatus, Slot, StatusSummary};
use doctor_cell::{DoctorError, DoctorView};
use patient_cell::PatientError;
use shared_models::auth::SessionUser;
use shared_models::error::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct ActivityItem {
    pub patient: String,
    pub time: Slot,
    pub status: AppointmentStatus,
    pub status_label: &'static str,
}

/// Shortcut tile on the dashboard pointing at an API route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub title: &'static str,
    pub method: &'static str,
    pub route: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub user: SessionUser,
    pub date: NaiveDate,
    pub date_display: String,
    pub total_patients: usize,
    pub critical_patients: usize,
    pub available_doctors: usize,
    pub appointments_today: StatusSummary,
    pub occupancy_percent: u32,
    pub daily_revenue: u64,
    pub daily_revenue_display: String,
    pub doctors: Vec<DoctorView>,
    pub recent_activity: Vec<ActivityItem>,
    pub quick_actions: Vec<QuickAction>,
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Patient(#[from] PatientError),

    #[error(transparent)]
    Doctor(#[from] DoctorError),

    #[error(transparent)]
    Appointment(#[from] AppointmentError),
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::Patient(err) => err.into(),
            DashboardError::Doctor(err) => err.into(),
            DashboardError::Appointment(err) => err.into(),
        }
    }
}
