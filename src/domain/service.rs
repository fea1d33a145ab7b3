use serde::{Deserialize, Serialize};

use crate::domain::common::Displayable;

/// Closed set of bookable care services.
///
/// Identifiers match the catalog keys used across the application
/// (`consulta`, `exame`, `procedimento`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    #[serde(rename = "consulta")]
    Consultation,
    #[serde(rename = "exame")]
    Exam,
    #[serde(rename = "procedimento")]
    Procedure,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [
        ServiceKind::Consultation,
        ServiceKind::Exam,
        ServiceKind::Procedure,
    ];

    /// Stable catalog identifier.
    pub fn id(self) -> &'static str {
        match self {
            ServiceKind::Consultation => "consulta",
            ServiceKind::Exam => "exame",
            ServiceKind::Procedure => "procedimento",
        }
    }

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::Consultation => "Consulta",
            ServiceKind::Exam => "Exame",
            ServiceKind::Procedure => "Procedimento",
        }
    }

    pub fn parse(input: &str) -> Option<ServiceKind> {
        let normalized = input.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == normalized)
    }
}

/// Catalog entry describing one bookable service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceOption {
    pub kind: ServiceKind,
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub accent: String,
}

impl ServiceOption {
    pub fn new(
        kind: ServiceKind,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        icon: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            subtitle: subtitle.into(),
            icon: icon.into(),
            accent: accent.into(),
        }
    }
}

impl Displayable for ServiceOption {
    fn display_label(&self) -> String {
        format!("{} — {}", self.title, self.subtitle)
    }
}
