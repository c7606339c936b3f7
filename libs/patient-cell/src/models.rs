use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use shared_database::{Entity, RepositoryError};
use shared_models::error::AppError;
use shared_utils::filter::Searchable;
use shared_utils::format::format_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Active,
    Inactive,
    Critical,
}

impl PatientStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PatientStatus::Active => "Активен",
            PatientStatus::Inactive => "Неактивен",
            PatientStatus::Critical => "Критично",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Мужской",
            Gender::Female => "Женский",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub insurance: String,
    pub status: PatientStatus,
    pub last_visit: Option<NaiveDate>,
    pub diagnosis: Option<String>,
}

impl Patient {
    /// Whole years on `today`; zero for birth dates in the future.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.birth_date).unwrap_or(0)
    }
}

impl Entity for Patient {
    const KIND: &'static str = "patient";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for Patient {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.phone.as_str(), self.email.as_str()]
    }
}

/// Registry card: the record plus what the screen derives from it.
#[derive(Debug, Clone, Serialize)]
pub struct PatientView {
    #[serde(flatten)]
    pub patient: Patient,
    pub age: u32,
    pub status_label: &'static str,
    pub gender_label: &'static str,
    pub birth_date_display: String,
    pub last_visit_display: String,
}

impl PatientView {
    pub fn new(patient: Patient, today: NaiveDate) -> Self {
        Self {
            age: patient.age_on(today),
            status_label: patient.status.label(),
            gender_label: patient.gender.label(),
            birth_date_display: format_date(patient.birth_date),
            last_visit_display: patient
                .last_visit
                .map(format_date)
                .unwrap_or_else(|| "Не было".to_string()),
            patient,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub insurance: String,
    pub diagnosis: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePatientRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub insurance: Option<String>,
    pub status: Option<PatientStatus>,
    pub last_visit: Option<NaiveDate>,
    pub diagnosis: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientSearchQuery {
    pub q: Option<String>,
    pub status: Option<PatientStatus>,
}

#[derive(Debug, Error)]
pub enum PatientError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<PatientError> for AppError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::MissingField(_) => AppError::ValidationError(err.to_string()),
            PatientError::Repository(err) => err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(birth_date: NaiveDate, last_visit: Option<NaiveDate>) -> Patient {
        Patient {
            id: Uuid::new_v4(),
            name: "Петрова Анна Сергеевна".to_string(),
            phone: "+7 (999) 234-56-78".to_string(),
            email: "petrova@email.com".to_string(),
            birth_date,
            gender: Gender::Female,
            address: "г. Москва, пр. Мира, д. 25, кв. 12".to_string(),
            insurance: "ОМС 987654321".to_string(),
            status: PatientStatus::Active,
            last_visit,
            diagnosis: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_counts_completed_years() {
        let p = patient(date(1990, 7, 22), None);
        assert_eq!(p.age_on(date(2024, 9, 18)), 34);
        assert_eq!(p.age_on(date(2024, 7, 21)), 33);
        assert_eq!(p.age_on(date(2024, 7, 22)), 34);
    }

    #[test]
    fn age_of_unborn_is_zero() {
        let p = patient(date(2030, 1, 1), None);
        assert_eq!(p.age_on(date(2024, 9, 18)), 0);
    }

    #[test]
    fn view_formats_dates_and_labels() {
        let view = PatientView::new(patient(date(1990, 7, 22), Some(date(2024, 9, 18))), date(2024, 9, 18));
        assert_eq!(view.age, 34);
        assert_eq!(view.status_label, "Активен");
        assert_eq!(view.gender_label, "Женский");
        assert_eq!(view.birth_date_display, "22.07.1990");
        assert_eq!(view.last_visit_display, "18.09.2024");

        let never = PatientView::new(patient(date(1990, 7, 22), None), date(2024, 9, 18));
        assert_eq!(never.last_visit_display, "Не было");
    }
}
