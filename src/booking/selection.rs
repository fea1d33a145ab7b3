use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::ServiceKind;

/// The five steps of the guided booking flow, derived from which selection
/// fields are populated rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Service,
    Facility,
    Date,
    Time,
    Review,
}

impl WizardStep {
    pub const COUNT: u8 = 5;

    /// 1-based position shown in the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Service => 1,
            WizardStep::Facility => 2,
            WizardStep::Date => 3,
            WizardStep::Time => 4,
            WizardStep::Review => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Service => "Escolha o tipo de serviço",
            WizardStep::Facility => "Selecione a unidade de atendimento",
            WizardStep::Date => "Defina a data da consulta",
            WizardStep::Time => "Selecione o horário disponível",
            WizardStep::Review => "Revise antes de confirmar",
        }
    }
}

/// The only mutable record of the wizard: the user's current choices.
///
/// Later fields are only meaningful while every earlier field is set; the
/// constructors below replace the whole record so a stale downstream value
/// can never survive an upstream change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSelection {
    pub service: Option<ServiceKind>,
    pub facility: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl BookingSelection {
    /// Derives the current step from the first unset field, in order.
    pub fn step(&self) -> WizardStep {
        if self.service.is_none() {
            WizardStep::Service
        } else if self.facility.is_none() {
            WizardStep::Facility
        } else if self.date.is_none() {
            WizardStep::Date
        } else if self.time.is_none() {
            WizardStep::Time
        } else {
            WizardStep::Review
        }
    }

    pub fn is_complete(&self) -> bool {
        self.step() == WizardStep::Review
    }

    /// Fresh selection holding only a service choice.
    pub fn with_service(service: ServiceKind) -> Self {
        Self {
            service: Some(service),
            ..Self::default()
        }
    }

    /// Replacement selection keeping the service and setting the facility;
    /// date and time always start over.
    pub fn with_facility(&self, facility: impl Into<String>) -> Self {
        Self {
            service: self.service,
            facility: Some(facility.into()),
            ..Self::default()
        }
    }

    /// Replacement selection keeping service and facility; time starts over.
    pub fn with_date(&self, date: NaiveDate) -> Self {
        Self {
            service: self.service,
            facility: self.facility.clone(),
            date: Some(date),
            time: None,
        }
    }

    pub fn with_time(&self, time: NaiveTime) -> Self {
        Self {
            service: self.service,
            facility: self.facility.clone(),
            date: self.date,
            time: Some(time),
        }
    }
}
