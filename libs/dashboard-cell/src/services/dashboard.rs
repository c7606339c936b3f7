use std::cmp::Reverse;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use appointment_cell::AppointmentService;
use doctor_cell::{DoctorSearchQuery, DoctorService, DoctorView};
use patient_cell::{PatientService, PatientStatus};
use shared_models::auth::SessionUser;
use shared_utils::format::{format_date, format_rubles};

use crate::models::{ActivityItem, DashboardError, DashboardSummary, QuickAction};

/// Fixed demo takings for the day, in whole roubles.
pub const DAILY_REVENUE_RUB: u64 = 45_230;

const RECENT_ACTIVITY_LIMIT: usize = 4;

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction { title: "Новый пациент", method: "POST", route: "/patients" },
    QuickAction { title: "Расписание", method: "GET", route: "/appointments/schedule" },
    QuickAction { title: "Медкарты", method: "GET", route: "/documents/medical-record" },
    QuickAction { title: "Отчёты", method: "GET", route: "/documents" },
];

pub struct DashboardService {
    patients: Arc<PatientService>,
    doctors: Arc<DoctorService>,
    appointments: Arc<AppointmentService>,
}

impl DashboardService {
    pub fn new(
        patients: Arc<PatientService>,
        doctors: Arc<DoctorService>,
        appointments: Arc<AppointmentService>,
    ) -> Self {
        Self {
            patients,
            doctors,
            appointments,
        }
    }

    pub async fn summary(
        &self,
        user: SessionUser,
        today: NaiveDate,
    ) -> Result<DashboardSummary, DashboardError> {
        debug!("Building dashboard for {} on {}", user.email, today);

        let grid_size = self.appointments.grid().len();
        let occupied = self.appointments.occupied(today).await?.len();
        let occupancy_percent = if grid_size == 0 {
            0
        } else {
            (occupied * 100 / grid_size) as u32
        };

        let mut todays = self.appointments.day(today).await?;
        todays.sort_by_key(|appointment| Reverse(appointment.time));
        let recent_activity = todays
            .into_iter()
            .take(RECENT_ACTIVITY_LIMIT)
            .map(|appointment| ActivityItem {
                status_label: appointment.status.label(),
                patient: appointment.patient,
                time: appointment.time,
                status: appointment.status,
            })
            .collect();

        let doctors = self
            .doctors
            .list(&DoctorSearchQuery::default())
            .await?
            .into_iter()
            .map(DoctorView::from)
            .collect();

        Ok(DashboardSummary {
            user,
            date: today,
            date_display: format_date(today),
            total_patients: self.patients.count().await?,
            critical_patients: self.patients.count_with_status(PatientStatus::Critical).await?,
            available_doctors: self.doctors.available_count().await?,
            appointments_today: self.appointments.summary(today).await?,
            occupancy_percent,
            daily_revenue: DAILY_REVENUE_RUB,
            daily_revenue_display: format_rubles(DAILY_REVENUE_RUB),
            doctors,
            recent_activity,
            quick_actions: QUICK_ACTIONS.to_vec(),
        })
    }
}
