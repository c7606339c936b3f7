use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Appointment, AppointmentStatus, VisitType};
use crate::slot::Slot;

const DEMO_DAY: &[(u32, u32, &str, &str, VisitType, AppointmentStatus, Option<&str>)] = &[
    (9, 0, "Иванов И.И.", "Терапевт Петров А.В.", VisitType::InitialVisit, AppointmentStatus::Completed, Some("Профилактический осмотр")),
    (9, 30, "Петрова А.С.", "Кардиолог Сидорова М.П.", VisitType::FollowUp, AppointmentStatus::Completed, None),
    (10, 0, "Сидоров П.М.", "Терапевт Петров А.В.", VisitType::InitialVisit, AppointmentStatus::InProgress, None),
    (10, 30, "Козлова М.В.", "Невролог Иванова Е.К.", VisitType::Consultation, AppointmentStatus::Scheduled, None),
    (11, 0, "Новиков А.А.", "Терапевт Петров А.В.", VisitType::FollowUp, AppointmentStatus::Scheduled, None),
    (14, 0, "Смирнова О.Л.", "Кардиолог Сидорова М.П.", VisitType::InitialVisit, AppointmentStatus::Scheduled, None),
];

/// The demo schedule placed on `day`.
pub fn demo_appointments(day: NaiveDate) -> Vec<Appointment> {
    DEMO_DAY
        .iter()
        .filter_map(|&(hour, minute, patient, doctor, visit_type, status, notes)| {
            Some(Appointment {
                id: Uuid::new_v4(),
                date: day,
                time: Slot::new(hour, minute)?,
                patient: patient.to_string(),
                doctor: doctor.to_string(),
                visit_type,
                status,
                notes: notes.map(str::to_string),
            })
        })
        .collect()
}
