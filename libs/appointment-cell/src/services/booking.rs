use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use doctor_cell::DoctorService;
use shared_database::{InMemoryRepository, Repository};
use shared_utils::filter::filter_records;

use crate::models::{
    Appointment, AppointmentError, AppointmentQuery, AppointmentStatus, BookingOptions,
    CreateAppointmentRequest, StatusSummary, UpdateAppointmentRequest, VisitType, VisitTypeOption,
};
use crate::seed::demo_appointments;
use crate::services::slots::{available_slots, occupied_slots, schedule_view, ScheduleEntry};
use crate::slot::{Slot, SlotGrid};

pub struct AppointmentService {
    repository: Arc<dyn Repository<Appointment>>,
    doctors: Arc<DoctorService>,
    grid: SlotGrid,
    // Serialises every read-modify-write, including the free-slot check.
    write_lock: Mutex<()>,
}

impl AppointmentService {
    pub fn new(
        repository: Arc<dyn Repository<Appointment>>,
        doctors: Arc<DoctorService>,
        grid: SlotGrid,
    ) -> Self {
        Self {
            repository,
            doctors,
            grid,
            write_lock: Mutex::new(()),
        }
    }

    /// Standard grid with the demo schedule placed on `day`.
    pub fn with_demo_schedule(doctors: Arc<DoctorService>, day: NaiveDate) -> Self {
        Self::new(
            Arc::new(InMemoryRepository::with_items(demo_appointments(day))),
            doctors,
            SlotGrid::standard(),
        )
    }

    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    /// A day's appointments in booking order.
    pub async fn day(&self, date: NaiveDate) -> Result<Vec<Appointment>, AppointmentError> {
        let mut appointments = self.repository.list().await?;
        appointments.retain(|appointment| appointment.date == date);
        Ok(appointments)
    }

    pub async fn list(
        &self,
        date: NaiveDate,
        query: &AppointmentQuery,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        debug!("Listing appointments on {} with query: {:?}", date, query);

        let appointments = self.day(date).await?;
        let mut appointments = filter_records(appointments, query.q.as_deref().unwrap_or_default());
        if let Some(status) = query.status {
            appointments.retain(|appointment| appointment.status == status);
        }
        Ok(appointments)
    }

    /// The day's appointments that still hold their slot. Cancelled visits
    /// are dropped before the grid is consulted.
    async fn holding(&self, date: NaiveDate) -> Result<Vec<Appointment>, AppointmentError> {
        let mut appointments = self.day(date).await?;
        appointments.retain(|appointment| appointment.status.holds_slot());
        Ok(appointments)
    }

    pub async fn get(&self, id: Uuid) -> Result<Appointment, AppointmentError> {
        Ok(self.repository.get(id).await?)
    }

    pub async fn schedule(&self, date: NaiveDate) -> Result<Vec<ScheduleEntry>, AppointmentError> {
        Ok(schedule_view(&self.grid, &self.holding(date).await?))
    }

    pub async fn available(&self, date: NaiveDate) -> Result<Vec<Slot>, AppointmentError> {
        Ok(available_slots(&self.grid, &self.holding(date).await?))
    }

    pub async fn occupied(&self, date: NaiveDate) -> Result<Vec<Slot>, AppointmentError> {
        Ok(occupied_slots(&self.grid, &self.holding(date).await?))
    }

    pub async fn options(&self, date: NaiveDate) -> Result<BookingOptions, AppointmentError> {
        Ok(BookingOptions {
            date,
            slots: self.available(date).await?,
            doctors: self.doctors.schedule_labels().await?,
            visit_types: VisitType::ALL
                .iter()
                .map(|&value| VisitTypeOption { value, label: value.label() })
                .collect(),
        })
    }

    pub async fn book(
        &self,
        request: CreateAppointmentRequest,
        today: NaiveDate,
    ) -> Result<Appointment, AppointmentError> {
        let date = request.date.unwrap_or(today);

        if !self.grid.contains(request.time) {
            return Err(AppointmentError::OffGrid(request.time));
        }
        let patient = request.patient.trim();
        if patient.is_empty() {
            return Err(AppointmentError::MissingField("patient"));
        }
        let doctor = request.doctor.trim();
        if !self.doctors.schedule_labels().await?.iter().any(|label| label == doctor) {
            return Err(AppointmentError::UnknownDoctor(doctor.to_string()));
        }

        let _guard = self.write_lock.lock().await;

        if self.occupied(date).await?.contains(&request.time) {
            warn!("Rejected double booking of {} on {}", request.time, date);
            return Err(AppointmentError::SlotTaken { date, time: request.time });
        }

        let appointment = Appointment {
            id: Uuid::new_v4(),
            date,
            time: request.time,
            patient: patient.to_string(),
            doctor: doctor.to_string(),
            visit_type: request.visit_type,
            status: AppointmentStatus::Scheduled,
            notes: request.notes.filter(|notes| !notes.trim().is_empty()),
        };

        let appointment = self.repository.create(appointment).await?;
        info!("Booked {} on {} at {}", appointment.patient, appointment.date, appointment.time);
        Ok(appointment)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let _guard = self.write_lock.lock().await;
        let mut appointment = self.repository.get(id).await?;

        if let Some(status) = request.status {
            if !appointment.status.can_transition_to(status) {
                return Err(AppointmentError::InvalidStatusTransition {
                    from: appointment.status,
                    to: status,
                });
            }
            debug!("Appointment {} status {:?} -> {:?}", id, appointment.status, status);
            appointment.status = status;
        }
        if let Some(notes) = request.notes {
            appointment.notes = Some(notes).filter(|notes| !notes.trim().is_empty());
        }

        Ok(self.repository.update(appointment).await?)
    }

    pub async fn summary(&self, date: NaiveDate) -> Result<StatusSummary, AppointmentError> {
        let appointments = self.day(date).await?;
        let count = |status: AppointmentStatus| {
            appointments.iter().filter(|a| a.status == status).count()
        };

        Ok(StatusSummary {
            date,
            total: appointments.len(),
            scheduled: count(AppointmentStatus::Scheduled),
            in_progress: count(AppointmentStatus::InProgress),
            completed: count(AppointmentStatus::Completed),
            cancelled: count(AppointmentStatus::Cancelled),
        })
    }
}
