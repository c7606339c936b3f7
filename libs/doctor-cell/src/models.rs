use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use shared_database::{Entity, RepositoryError};
use shared_models::error::AppError;
use shared_utils::filter::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoctorStatus {
    Available,
    Busy,
    Offline,
}

impl DoctorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DoctorStatus::Available => "Доступен",
            DoctorStatus::Busy => "Занят",
            DoctorStatus::Offline => "Офлайн",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub patients: u32,
    pub status: DoctorStatus,
}

impl Doctor {
    /// How the booking form names a doctor, e.g. `Терапевт Петров А.В.`.
    pub fn schedule_label(&self) -> String {
        format!("{} {}", self.specialty, self.name)
    }
}

impl Entity for Doctor {
    const KIND: &'static str = "doctor";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for Doctor {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorView {
    #[serde(flatten)]
    pub doctor: Doctor,
    pub status_label: &'static str,
    pub schedule_label: String,
}

impl From<Doctor> for DoctorView {
    fn from(doctor: Doctor) -> Self {
        Self {
            status_label: doctor.status.label(),
            schedule_label: doctor.schedule_label(),
            doctor,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub specialty: String,
    pub patients: Option<u32>,
    pub status: Option<DoctorStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDoctorRequest {
    pub specialty: Option<String>,
    pub patients: Option<u32>,
    pub status: Option<DoctorStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorSearchQuery {
    pub q: Option<String>,
    pub status: Option<DoctorStatus>,
}

#[derive(Debug, Error)]
pub enum DoctorError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::ValidationError(msg) => AppError::ValidationError(msg),
            DoctorError::Repository(err) => err.into(),
        }
    }
}
