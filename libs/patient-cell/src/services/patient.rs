use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use shared_database::{InMemoryRepository, Repository};
use shared_utils::filter::filter_records;

use crate::models::{
    CreatePatientRequest, Patient, PatientError, PatientSearchQuery, PatientStatus,
    UpdatePatientRequest,
};
use crate::seed::demo_patients;

pub struct PatientService {
    repository: Arc<dyn Repository<Patient>>,
    update_lock: Mutex<()>,
}

fn required(value: &str, field: &'static str) -> Result<String, PatientError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PatientError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

impl PatientService {
    pub fn new(repository: Arc<dyn Repository<Patient>>) -> Self {
        Self {
            repository,
            update_lock: Mutex::new(()),
        }
    }

    pub fn with_demo_registry() -> Self {
        Self::new(Arc::new(InMemoryRepository::with_items(demo_patients())))
    }

    pub async fn search(&self, query: &PatientSearchQuery) -> Result<Vec<Patient>, PatientError> {
        debug!("Searching patients with query: {:?}", query);

        let patients = self.repository.list().await?;
        let mut patients = filter_records(patients, query.q.as_deref().unwrap_or_default());
        if let Some(status) = query.status {
            patients.retain(|patient| patient.status == status);
        }

        Ok(patients)
    }

    pub async fn get(&self, id: Uuid) -> Result<Patient, PatientError> {
        Ok(self.repository.get(id).await?)
    }

    pub async fn register(&self, request: CreatePatientRequest) -> Result<Patient, PatientError> {
        let patient = Patient {
            id: Uuid::new_v4(),
            name: required(&request.name, "name")?,
            phone: required(&request.phone, "phone")?,
            email: required(&request.email, "email")?,
            birth_date: request.birth_date,
            gender: request.gender,
            address: required(&request.address, "address")?,
            insurance: required(&request.insurance, "insurance")?,
            status: PatientStatus::Active,
            last_visit: None,
            diagnosis: request.diagnosis.filter(|d| !d.trim().is_empty()),
        };

        debug!("Registering patient: {}", patient.email);
        Ok(self.repository.create(patient).await?)
    }

    pub async fn update(&self, id: Uuid, request: UpdatePatientRequest) -> Result<Patient, PatientError> {
        debug!("Updating patient: {}", id);
        let _guard = self.update_lock.lock().await;
        let mut patient = self.repository.get(id).await?;

        if let Some(name) = request.name {
            patient.name = required(&name, "name")?;
        }
        if let Some(phone) = request.phone {
            patient.phone = required(&phone, "phone")?;
        }
        if let Some(email) = request.email {
            patient.email = required(&email, "email")?;
        }
        if let Some(address) = request.address {
            patient.address = required(&address, "address")?;
        }
        if let Some(insurance) = request.insurance {
            patient.insurance = required(&insurance, "insurance")?;
        }
        if let Some(status) = request.status {
            patient.status = status;
        }
        if let Some(last_visit) = request.last_visit {
            patient.last_visit = Some(last_visit);
        }
        if let Some(diagnosis) = request.diagnosis {
            patient.diagnosis = Some(diagnosis).filter(|d| !d.trim().is_empty());
        }

        Ok(self.repository.update(patient).await?)
    }

    pub async fn count(&self) -> Result<usize, PatientError> {
        Ok(self.repository.list().await?.len())
    }

    pub async fn count_with_status(&self, status: PatientStatus) -> Result<usize, PatientError> {
        Ok(self
            .repository
            .list()
            .await?
            .iter()
            .filter(|patient| patient.status == status)
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use crate::models::Gender;

    fn registration() -> CreatePatientRequest {
        CreatePatientRequest {
            name: "Смирнова Ольга Львовна".to_string(),
            phone: "+7 (999) 678-90-12".to_string(),
            email: "smirnova@email.com".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1992, 2, 14).unwrap(),
            gender: Gender::Female,
            address: "г. Москва, ул. Арбат, д. 1".to_string(),
            insurance: "ОМС 555666777".to_string(),
            diagnosis: None,
        }
    }

    fn query(q: &str) -> PatientSearchQuery {
        PatientSearchQuery { q: Some(q.to_string()), status: None }
    }

    #[tokio::test]
    async fn search_covers_name_phone_and_email() {
        let service = PatientService::with_demo_registry();

        let by_name = service.search(&query("иванов")).await.unwrap();
        assert_eq!(by_name.len(), 1);

        let by_phone = service.search(&query("345-67")).await.unwrap();
        assert_eq!(by_phone[0].name, "Сидоров Петр Михайлович");

        let by_email = service.search(&query("KOZLOVA@")).await.unwrap();
        assert_eq!(by_email[0].name, "Козлова Мария Владимировна");
    }

    #[tokio::test]
    async fn empty_query_lists_registry_in_order() {
        let service = PatientService::with_demo_registry();
        let all = service.search(&PatientSearchQuery::default()).await.unwrap();
        let same = service.search(&query("")).await.unwrap();

        assert_eq!(all, same);
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].name, "Иванов Иван Иванович");
    }

    #[tokio::test]
    async fn status_filter_narrows_results() {
        let service = PatientService::with_demo_registry();
        let critical = service
            .search(&PatientSearchQuery { q: None, status: Some(PatientStatus::Critical) })
            .await
            .unwrap();

        assert_eq!(critical.len(), 1);
        assert_eq!(service.count_with_status(PatientStatus::Critical).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn registration_persists_active_patient() {
        let service = PatientService::with_demo_registry();
        let patient = service.register(registration()).await.unwrap();

        assert_eq!(patient.status, PatientStatus::Active);
        assert_eq!(patient.last_visit, None);
        assert_eq!(service.get(patient.id).await.unwrap(), patient);
        assert_eq!(service.count().await.unwrap(), 6);
    }

    #[tokio::test]
    async fn registration_requires_fields() {
        let service = PatientService::with_demo_registry();
        let mut request = registration();
        request.insurance = "   ".to_string();

        let err = service.register(request).await.unwrap_err();
        assert_matches!(err, PatientError::MissingField("insurance"));
        assert_eq!(service.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn update_touches_only_given_fields() {
        let service = PatientService::with_demo_registry();
        let before = service.search(&query("Козлова")).await.unwrap().remove(0);

        let after = service
            .update(before.id, UpdatePatientRequest { status: Some(PatientStatus::Active), ..Default::default() })
            .await
            .unwrap();

        assert_eq!(after.status, PatientStatus::Active);
        assert_eq!(after.phone, before.phone);
        assert_eq!(after.name, before.name);
    }

    #[tokio::test]
    async fn concurrent_updates_keep_both_changes() {
        let service = Arc::new(PatientService::with_demo_registry());
        let id = service.search(&PatientSearchQuery::default()).await.unwrap()[0].id;

        let phone = {
            let service = service.clone();
            tokio::spawn(async move {
                let request = UpdatePatientRequest {
                    phone: Some("+7 (999) 000-00-00".to_string()),
                    ..Default::default()
                };
                service.update(id, request).await
            })
        };
        let status = {
            let service = service.clone();
            tokio::spawn(async move {
                let request = UpdatePatientRequest {
                    status: Some(PatientStatus::Critical),
                    ..Default::default()
                };
                service.update(id, request).await
            })
        };
        phone.await.unwrap().unwrap();
        status.await.unwrap().unwrap();

        let stored = service.get(id).await.unwrap();
        assert_eq!(stored.phone, "+7 (999) 000-00-00");
        assert_eq!(stored.status, PatientStatus::Critical);
    }
}
