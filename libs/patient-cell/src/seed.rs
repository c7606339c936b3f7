use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Gender, Patient, PatientStatus};

struct SeedPatient {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    birth_date: (i32, u32, u32),
    gender: Gender,
    address: &'static str,
    insurance: &'static str,
    status: PatientStatus,
    last_visit: Option<(i32, u32, u32)>,
    diagnosis: Option<&'static str>,
}

const DEMO_PATIENTS: &[SeedPatient] = &[
    SeedPatient {
        name: "Иванов Иван Иванович",
        phone: "+7 (999) 123-45-67",
        email: "ivanov@email.com",
        birth_date: (1985, 3, 15),
        gender: Gender::Male,
        address: "г. Москва, ул. Ленина, д. 10, кв. 5",
        insurance: "ОМС 123456789",
        status: PatientStatus::Active,
        last_visit: Some((2024, 9, 15)),
        diagnosis: Some("Гипертония"),
    },
    SeedPatient {
        name: "Петрова Анна Сергеевна",
        phone: "+7 (999) 234-56-78",
        email: "petrova@email.com",
        birth_date: (1990, 7, 22),
        gender: Gender::Female,
        address: "г. Москва, пр. Мира, д. 25, кв. 12",
        insurance: "ОМС 987654321",
        status: PatientStatus::Active,
        last_visit: Some((2024, 9, 18)),
        diagnosis: None,
    },
    SeedPatient {
        name: "Сидоров Петр Михайлович",
        phone: "+7 (999) 345-67-89",
        email: "sidorov@email.com",
        birth_date: (1975, 11, 8),
        gender: Gender::Male,
        address: "г. Москва, ул. Гагарина, д. 3, кв. 8",
        insurance: "ДМС 456789123",
        status: PatientStatus::Active,
        last_visit: None,
        diagnosis: Some("Профилактика"),
    },
    SeedPatient {
        name: "Козлова Мария Владимировна",
        phone: "+7 (999) 456-78-90",
        email: "kozlova@email.com",
        birth_date: (1988, 12, 30),
        gender: Gender::Female,
        address: "г. Москва, ул. Пушкина, д. 15, кв. 3",
        insurance: "ОМС 321654987",
        status: PatientStatus::Inactive,
        last_visit: None,
        diagnosis: None,
    },
    SeedPatient {
        name: "Новиков Алексей Андреевич",
        phone: "+7 (999) 567-89-01",
        email: "novikov@email.com",
        birth_date: (1979, 4, 2),
        gender: Gender::Male,
        address: "г. Москва, ул. Тверская, д. 7, кв. 41",
        insurance: "ОМС 741852963",
        status: PatientStatus::Critical,
        last_visit: Some((2024, 9, 17)),
        diagnosis: Some("Диабет 2 типа"),
    },
];

fn ymd((y, m, d): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

/// The registry's demo records; entries with an impossible date are skipped.
pub fn demo_patients() -> Vec<Patient> {
    DEMO_PATIENTS
        .iter()
        .filter_map(|seed| {
            Some(Patient {
                id: Uuid::new_v4(),
                name: seed.name.to_string(),
                phone: seed.phone.to_string(),
                email: seed.email.to_string(),
                birth_date: ymd(seed.birth_date)?,
                gender: seed.gender,
                address: seed.address.to_string(),
                insurance: seed.insurance.to_string(),
                status: seed.status,
                last_visit: seed.last_visit.and_then(ymd),
                diagnosis: seed.diagnosis.map(str::to_string),
            })
        })
        .collect()
}
