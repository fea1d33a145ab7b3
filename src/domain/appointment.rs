use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::common::Displayable;
use crate::domain::service::ServiceKind;

/// Lifecycle states of a booked appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[serde(rename = "agendado")]
    Scheduled,
    #[serde(rename = "confirmado")]
    Confirmed,
    #[serde(rename = "cancelado")]
    Cancelled,
    #[serde(rename = "realizado")]
    Completed,
}

impl AppointmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Agendado",
            AppointmentStatus::Confirmed => "Confirmado",
            AppointmentStatus::Cancelled => "Cancelado",
            AppointmentStatus::Completed => "Realizado",
        }
    }

    /// Scheduled and confirmed appointments still lie ahead; the rest are
    /// history.
    pub fn is_upcoming(self) -> bool {
        matches!(
            self,
            AppointmentStatus::Scheduled | AppointmentStatus::Confirmed
        )
    }
}

/// A single appointment record, as surfaced in the agenda views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub kind: ServiceKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub facility: String,
    pub address: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn is_upcoming(&self) -> bool {
        self.status.is_upcoming()
    }

    /// Only appointments still ahead can be cancelled.
    pub fn is_cancellable(&self) -> bool {
        self.status.is_upcoming()
    }
}

impl Displayable for Appointment {
    fn display_label(&self) -> String {
        format!(
            "{} · {} · {} {}",
            self.title,
            self.status.label(),
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_partition_is_exhaustive() {
        assert!(AppointmentStatus::Scheduled.is_upcoming());
        assert!(AppointmentStatus::Confirmed.is_upcoming());
        assert!(!AppointmentStatus::Cancelled.is_upcoming());
        assert!(!AppointmentStatus::Completed.is_upcoming());
    }
}
