use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use shared_database::{InMemoryRepository, Repository};
use shared_utils::filter::filter_records;

use crate::models::{
    CreateDoctorRequest, Doctor, DoctorError, DoctorSearchQuery, DoctorStatus,
    UpdateDoctorRequest,
};
use crate::seed::demo_doctors;

pub struct DoctorService {
    repository: Arc<dyn Repository<Doctor>>,
    update_lock: Mutex<()>,
}

impl DoctorService {
    pub fn new(repository: Arc<dyn Repository<Doctor>>) -> Self {
        Self {
            repository,
            update_lock: Mutex::new(()),
        }
    }

    pub fn with_demo_roster() -> Self {
        Self::new(Arc::new(InMemoryRepository::with_items(demo_doctors())))
    }

    pub async fn list(&self, query: &DoctorSearchQuery) -> Result<Vec<Doctor>, DoctorError> {
        debug!("Listing doctors with query: {:?}", query);

        let doctors = self.repository.list().await?;
        let mut doctors = filter_records(doctors, query.q.as_deref().unwrap_or_default());
        if let Some(status) = query.status {
            doctors.retain(|doctor| doctor.status == status);
        }

        Ok(doctors)
    }

    pub async fn get(&self, id: Uuid) -> Result<Doctor, DoctorError> {
        Ok(self.repository.get(id).await?)
    }

    pub async fn create(&self, request: CreateDoctorRequest) -> Result<Doctor, DoctorError> {
        if request.name.trim().is_empty() {
            return Err(DoctorError::ValidationError("name is required".to_string()));
        }
        if request.specialty.trim().is_empty() {
            return Err(DoctorError::ValidationError("specialty is required".to_string()));
        }

        let doctor = Doctor {
            id: Uuid::new_v4(),
            name: request.name.trim().to_string(),
            specialty: request.specialty.trim().to_string(),
            patients: request.patients.unwrap_or(0),
            status: request.status.unwrap_or(DoctorStatus::Available),
        };

        debug!("Adding doctor {} ({})", doctor.name, doctor.specialty);
        Ok(self.repository.create(doctor).await?)
    }

    pub async fn update(&self, id: Uuid, request: UpdateDoctorRequest) -> Result<Doctor, DoctorError> {
        let _guard = self.update_lock.lock().await;
        let mut doctor = self.repository.get(id).await?;

        if let Some(specialty) = request.specialty {
            if specialty.trim().is_empty() {
                return Err(DoctorError::ValidationError("specialty is required".to_string()));
            }
            doctor.specialty = specialty.trim().to_string();
        }
        if let Some(patients) = request.patients {
            doctor.patients = patients;
        }
        if let Some(status) = request.status {
            doctor.status = status;
        }

        Ok(self.repository.update(doctor).await?)
    }

    pub async fn available_count(&self) -> Result<usize, DoctorError> {
        Ok(self
            .repository
            .list()
            .await?
            .iter()
            .filter(|doctor| doctor.status == DoctorStatus::Available)
            .count())
    }

    /// Labels offered by the booking form, in roster order.
    pub async fn schedule_labels(&self) -> Result<Vec<String>, DoctorError> {
        Ok(self
            .repository
            .list()
            .await?
            .iter()
            .map(Doctor::schedule_label)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn search_matches_name_only() {
        let service = DoctorService::with_demo_roster();

        let found = service
            .list(&DoctorSearchQuery { q: Some("морозов".to_string()), status: None })
            .await
            .unwrap();
        let names: Vec<_> = found.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Морозова Т.С.", "Морозов И.А."]);

        let by_specialty = service
            .list(&DoctorSearchQuery { q: Some("Кардиолог".to_string()), status: None })
            .await
            .unwrap();
        assert!(by_specialty.is_empty());
    }

    #[tokio::test]
    async fn status_filter_combines_with_query() {
        let service = DoctorService::with_demo_roster();

        let busy = service
            .list(&DoctorSearchQuery { q: None, status: Some(DoctorStatus::Busy) })
            .await
            .unwrap();
        assert_eq!(busy.len(), 2);
        assert_eq!(service.available_count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn schedule_labels_prefix_specialty() {
        let service = DoctorService::with_demo_roster();
        let labels = service.schedule_labels().await.unwrap();

        assert_eq!(labels[0], "Терапевт Петров А.В.");
        assert!(labels.contains(&"Офтальмолог Морозова Т.С.".to_string()));
    }

    #[tokio::test]
    async fn update_changes_status() {
        let service = DoctorService::with_demo_roster();
        let first = service.list(&DoctorSearchQuery::default()).await.unwrap()[0].clone();

        let updated = service
            .update(first.id, UpdateDoctorRequest { status: Some(DoctorStatus::Offline), ..Default::default() })
            .await
            .unwrap();

        assert_eq!(updated.status, DoctorStatus::Offline);
        assert_eq!(service.get(first.id).await.unwrap().status, DoctorStatus::Offline);
    }

    #[tokio::test]
    async fn create_requires_name() {
        let service = DoctorService::with_demo_roster();
        let err = service
            .create(CreateDoctorRequest {
                name: "  ".to_string(),
                specialty: "Хирург".to_string(),
                patients: None,
                status: None,
            })
            .await
            .unwrap_err();

        assert_matches!(err, DoctorError::ValidationError(_));
    }

    #[tokio::test]
    async fn concurrent_updates_keep_both_changes() {
        let service = Arc::new(DoctorService::with_demo_roster());
        let id = service.list(&DoctorSearchQuery::default()).await.unwrap()[0].id;

        let patients = {
            let service = service.clone();
            tokio::spawn(async move {
                let request = UpdateDoctorRequest { patients: Some(99), ..Default::default() };
                service.update(id, request).await
            })
        };
        let status = {
            let service = service.clone();
            tokio::spawn(async move {
                let request = UpdateDoctorRequest { status: Some(DoctorStatus::Offline), ..Default::default() };
                service.update(id, request).await
            })
        };
        patients.await.unwrap().unwrap();
        status.await.unwrap().unwrap();

        let stored = service.get(id).await.unwrap();
        assert_eq!(stored.patients, 99);
        assert_eq!(stored.status, DoctorStatus::Offline);
    }
}
