use uuid::Uuid;

use crate::models::{Doctor, DoctorStatus};

fn doctor(name: &str, specialty: &str, patients: u32, status: DoctorStatus) -> Doctor {
    Doctor {
        id: Uuid::new_v4(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        patients,
        status,
    }
}

/// The clinic's demo roster.
pub fn demo_doctors() -> Vec<Doctor> {
    vec![
        doctor("Петров А.В.", "Терапевт", 18, DoctorStatus::Available),
        doctor("Сидорова М.П.", "Кардиолог", 15, DoctorStatus::Busy),
        doctor("Иванова Е.К.", "Невролог", 11, DoctorStatus::Available),
        doctor("Козлов Д.И.", "Хирург", 9, DoctorStatus::Offline),
        doctor("Морозова Т.С.", "Офтальмолог", 14, DoctorStatus::Available),
        doctor("Соколова Е.В.", "Кардиолог", 15, DoctorStatus::Available),
        doctor("Морозов И.А.", "Эндокринолог", 12, DoctorStatus::Busy),
        doctor("Новикова М.С.", "Терапевт", 20, DoctorStatus::Available),
    ]
}
