use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use doctor_cell::DoctorError;
use shared_database::{Entity, RepositoryError};
use shared_models::error::AppError;
use shared_utils::filter::Searchable;
use shared_utils::format::format_date;

use crate::slot::Slot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Запланирован",
            AppointmentStatus::InProgress => "В процессе",
            AppointmentStatus::Completed => "Завершён",
            AppointmentStatus::Cancelled => "Отменён",
        }
    }

    /// Statuses reachable from this one; finished visits are terminal.
    pub fn next_statuses(&self) -> &'static [AppointmentStatus] {
        match self {
            AppointmentStatus::Scheduled => &[
                AppointmentStatus::InProgress,
                AppointmentStatus::Completed,
                AppointmentStatus::Cancelled,
            ],
            AppointmentStatus::InProgress => &[
                AppointmentStatus::Completed,
                AppointmentStatus::Cancelled,
            ],
            AppointmentStatus::Completed | AppointmentStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        *self == next || self.next_statuses().contains(&next)
    }

    /// Whether an appointment in this status holds its grid slot.
    pub fn holds_slot(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitType {
    InitialVisit,
    FollowUp,
    Consultation,
    Procedure,
    Diagnostics,
}

impl VisitType {
    pub const ALL: [VisitType; 5] = [
        VisitType::InitialVisit,
        VisitType::FollowUp,
        VisitType::Consultation,
        VisitType::Procedure,
        VisitType::Diagnostics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VisitType::InitialVisit => "Первичный приём",
            VisitType::FollowUp => "Повторный приём",
            VisitType::Consultation => "Консультация",
            VisitType::Procedure => "Процедура",
            VisitType::Diagnostics => "Диагностика",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: Slot,
    pub patient: String,
    pub doctor: String,
    pub visit_type: VisitType,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

impl Entity for Appointment {
    const KIND: &'static str = "appointment";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for Appointment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.patient.as_str()]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AppointmentView {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub status_label: &'static str,
    pub visit_type_label: &'static str,
    pub date_display: String,
}

impl From<Appointment> for AppointmentView {
    fn from(appointment: Appointment) -> Self {
        Self {
            status_label: appointment.status.label(),
            visit_type_label: appointment.visit_type.label(),
            date_display: format_date(appointment.date),
            appointment,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    /// Defaults to the current day.
    pub date: Option<NaiveDate>,
    pub time: Slot,
    pub patient: String,
    pub doctor: String,
    pub visit_type: VisitType,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentQuery {
    pub date: Option<NaiveDate>,
    pub q: Option<String>,
    pub status: Option<AppointmentStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub date: NaiveDate,
    pub total: usize,
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisitTypeOption {
    pub value: VisitType,
    pub label: &'static str,
}

/// Choices offered by the booking form for one day.
#[derive(Debug, Clone, Serialize)]
pub struct BookingOptions {
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
    pub doctors: Vec<String>,
    pub visit_types: Vec<VisitTypeOption>,
}

#[derive(Debug, Error)]
pub enum AppointmentError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0} is not on the appointment grid")]
    OffGrid(Slot),

    #[error("Unknown doctor: {0}")]
    UnknownDoctor(String),

    #[error("Slot {time} on {date} is already booked")]
    SlotTaken { date: NaiveDate, time: Slot },

    #[error("Cannot change appointment status from {from:?} to {to:?}")]
    InvalidStatusTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    #[error(transparent)]
    Doctor(#[from] DoctorError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::MissingField(_)
            | AppointmentError::OffGrid(_)
            | AppointmentError::UnknownDoctor(_)
            | AppointmentError::InvalidStatusTransition { .. } => {
                AppError::ValidationError(err.to_string())
            }
            AppointmentError::SlotTaken { .. } => AppError::Conflict(err.to_string()),
            AppointmentError::Doctor(err) => err.into(),
            AppointmentError::Repository(err) => err.into(),
        }
    }
}
