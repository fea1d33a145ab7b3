//! Static reference catalogs consumed by the booking wizard and the
//! directory views. The data is read-only configuration; the application
//! never mutates it.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;

use crate::domain::{
    Appointment, AppointmentStatus, FacilityKind, FacilityOption, ServiceKind, ServiceOption,
};

static SERVICES: Lazy<Vec<ServiceOption>> = Lazy::new(|| {
    vec![
        ServiceOption::new(
            ServiceKind::Consultation,
            "Consulta médica",
            "Atendimento com especialistas",
            "medical-services",
            "#0F6BA8",
        ),
        ServiceOption::new(
            ServiceKind::Exam,
            "Exames e diagnósticos",
            "Laboratório e imagem com agilidade",
            "biotech",
            "#1CB09A",
        ),
        ServiceOption::new(
            ServiceKind::Procedure,
            "Procedimentos clínicos",
            "Tratamentos e pequenas cirurgias",
            "healing",
            "#6650F2",
        ),
    ]
});

static FACILITIES: Lazy<Vec<FacilityOption>> = Lazy::new(|| {
    vec![
        FacilityOption {
            id: "1".into(),
            name: "Hospital São Lucas".into(),
            address: "Rua das Flores, 123 - Centro".into(),
            phone: "(11) 3333-4444".into(),
            kind: FacilityKind::Hospital,
            rating: 4.5,
            distance: "2.3 km".into(),
            specialties: vec![
                "Cardiologia".into(),
                "Neurologia".into(),
                "Ortopedia".into(),
                "Pediatria".into(),
            ],
            hours: "24h".into(),
        },
        FacilityOption {
            id: "2".into(),
            name: "Hospital Santa Maria".into(),
            address: "Av. Principal, 456 - Jardim América".into(),
            phone: "(11) 5555-6666".into(),
            kind: FacilityKind::Hospital,
            rating: 4.2,
            distance: "3.1 km".into(),
            specialties: vec![
                "Pediatria".into(),
                "Ginecologia".into(),
                "Dermatologia".into(),
                "Psiquiatria".into(),
            ],
            hours: "24h".into(),
        },
        FacilityOption {
            id: "3".into(),
            name: "Clínica Vida Nova".into(),
            address: "Rua da Saúde, 789 - Vila Nova".into(),
            phone: "(11) 7777-8888".into(),
            kind: FacilityKind::Clinic,
            rating: 4.0,
            distance: "1.8 km".into(),
            specialties: vec!["Clínica Geral".into(), "Cardiologia".into()],
            hours: "6h às 22h".into(),
        },
        FacilityOption {
            id: "4".into(),
            name: "Laboratório Diagnóstica".into(),
            address: "Av. Central, 321 - Centro".into(),
            phone: "(11) 9999-0000".into(),
            kind: FacilityKind::Laboratory,
            rating: 4.3,
            distance: "2.8 km".into(),
            specialties: vec![
                "Exames Laboratoriais".into(),
                "Diagnóstico por Imagem".into(),
            ],
            hours: "6h às 18h".into(),
        },
    ]
});

const CANDIDATE_DATES: [(i32, u32, u32); 5] = [
    (2025, 9, 25),
    (2025, 9, 26),
    (2025, 9, 27),
    (2025, 9, 30),
    (2025, 10, 1),
];

const CANDIDATE_TIMES: [(u32, u32); 8] = [
    (8, 0),
    (9, 0),
    (10, 0),
    (11, 0),
    (14, 0),
    (15, 0),
    (16, 0),
    (17, 0),
];

/// Read-only bundle of every selectable option the wizard offers.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    services: Vec<ServiceOption>,
    facilities: Vec<FacilityOption>,
    dates: Vec<NaiveDate>,
    times: Vec<NaiveTime>,
}

impl Default for Catalog {
    fn default() -> Self {
        let dates = CANDIDATE_DATES
            .iter()
            .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
            .collect();
        let times = CANDIDATE_TIMES
            .iter()
            .filter_map(|&(h, m)| NaiveTime::from_hms_opt(h, m, 0))
            .collect();
        Self {
            services: SERVICES.clone(),
            facilities: FACILITIES.clone(),
            dates,
            times,
        }
    }
}

impl Catalog {
    pub fn services(&self) -> &[ServiceOption] {
        &self.services
    }

    pub fn service(&self, kind: ServiceKind) -> Option<&ServiceOption> {
        self.services.iter().find(|option| option.kind == kind)
    }

    /// Full directory, including entries the wizard does not offer.
    pub fn facilities(&self) -> &[FacilityOption] {
        &self.facilities
    }

    /// Facilities selectable in the booking wizard.
    pub fn bookable_facilities(&self) -> impl Iterator<Item = &FacilityOption> {
        self.facilities.iter().filter(|f| f.is_bookable())
    }

    pub fn facility(&self, id: &str) -> Option<&FacilityOption> {
        self.facilities.iter().find(|option| option.id == id)
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn times(&self) -> &[NaiveTime] {
        &self.times
    }

    pub fn has_date(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn has_time(&self, time: NaiveTime) -> bool {
        self.times.contains(&time)
    }
}

/// Mock agenda shown before the user books anything themselves.
pub fn seed_appointments() -> Vec<Appointment> {
    let entries = [
        (
            "1",
            ServiceKind::Consultation,
            "Consulta cardiológica",
            Some("Dr. João Silva"),
            Some("Cardiologia"),
            (2025, 9, 25),
            (14, 30),
            "Hospital São Lucas",
            "Rua das Flores, 123",
            AppointmentStatus::Confirmed,
        ),
        (
            "2",
            ServiceKind::Exam,
            "Hemograma completo",
            None,
            None,
            (2025, 9, 28),
            (8, 0),
            "Laboratório Diagnóstica",
            "Av. Principal, 456",
            AppointmentStatus::Scheduled,
        ),
        (
            "3",
            ServiceKind::Consultation,
            "Consulta dermatológica",
            Some("Dra. Maria Santos"),
            Some("Dermatologia"),
            (2025, 9, 15),
            (10, 0),
            "Clínica Vida Nova",
            "Rua da Saúde, 789",
            AppointmentStatus::Completed,
        ),
        (
            "4",
            ServiceKind::Procedure,
            "Microcirurgia ambulatorial",
            Some("Dr. Carlos Lima"),
            Some("Cirurgia Geral"),
            (2025, 8, 20),
            (9, 0),
            "Hospital Central",
            "Av. Central, 100",
            AppointmentStatus::Cancelled,
        ),
    ];

    entries
        .into_iter()
        .filter_map(
            |(id, kind, title, doctor, specialty, (y, m, d), (hh, mm), facility, address, status)| {
                Some(Appointment {
                    id: id.to_string(),
                    kind,
                    title: title.to_string(),
                    doctor: doctor.map(str::to_string),
                    specialty: specialty.map(str::to_string),
                    date: NaiveDate::from_ymd_opt(y, m, d)?,
                    time: NaiveTime::from_hms_opt(hh, mm, 0)?,
                    facility: facility.to_string(),
                    address: address.to_string(),
                    status,
                })
            },
        )
        .collect()
}
