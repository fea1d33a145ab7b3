use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, NamedEntity};

/// Classification of care facilities in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityKind {
    Hospital,
    #[serde(rename = "clinica")]
    Clinic,
    #[serde(rename = "laboratorio")]
    Laboratory,
}

impl FacilityKind {
    pub const ALL: [FacilityKind; 3] = [
        FacilityKind::Hospital,
        FacilityKind::Clinic,
        FacilityKind::Laboratory,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FacilityKind::Hospital => "hospital",
            FacilityKind::Clinic => "clinica",
            FacilityKind::Laboratory => "laboratorio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FacilityKind::Hospital => "Hospital",
            FacilityKind::Clinic => "Clínica",
            FacilityKind::Laboratory => "Laboratório",
        }
    }

    pub fn parse(input: &str) -> Option<FacilityKind> {
        let normalized = input.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == normalized)
    }
}

/// Directory entry for a hospital, clinic, or laboratory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacilityOption {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub kind: FacilityKind,
    pub rating: f32,
    pub distance: String,
    pub specialties: Vec<String>,
    pub hours: String,
}

impl FacilityOption {
    /// Laboratories only take walk-in exams; everything else is bookable
    /// through the wizard.
    pub fn is_bookable(&self) -> bool {
        self.kind != FacilityKind::Laboratory
    }

    /// Case-insensitive match against name and specialties.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self
                .specialties
                .iter()
                .any(|specialty| specialty.to_lowercase().contains(&query))
    }
}

impl NamedEntity for FacilityOption {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for FacilityOption {
    fn display_label(&self) -> String {
        format!(
            "{} · {} · ★ {:.1} · {}",
            self.name,
            self.kind.label(),
            self.rating,
            self.distance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FacilityOption {
        FacilityOption {
            id: "9".into(),
            name: "Hospital Modelo".into(),
            address: "Rua Um, 1".into(),
            phone: "(11) 0000-0000".into(),
            kind: FacilityKind::Hospital,
            rating: 4.7,
            distance: "1.0 km".into(),
            specialties: vec!["Cardiologia".into(), "Pediatria".into()],
            hours: "24h".into(),
        }
    }

    #[test]
    fn query_matches_name_and_specialties() {
        let facility = sample();
        assert!(facility.matches_query("modelo"));
        assert!(facility.matches_query("cardio"));
        assert!(facility.matches_query(""));
        assert!(!facility.matches_query("ortopedia"));
    }

    #[test]
    fn laboratories_are_not_bookable() {
        let mut facility = sample();
        assert!(facility.is_bookable());
        facility.kind = FacilityKind::Laboratory;
        assert!(!facility.is_bookable());
    }
}
