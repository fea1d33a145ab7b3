use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::booking::selection::{BookingSelection, WizardStep};
use crate::booking::summary::{summarize, BookingSummary};
use crate::catalog::Catalog;
use crate::domain::ServiceKind;
use crate::format::Locale;

/// The only failure the wizard can signal: confirming before every step is
/// done. It is surfaced to the user and never propagated further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Finalize as etapas do agendamento antes de confirmar")]
    IncompleteSelection,
}

/// Cyclic state machine driving the guided booking flow.
///
/// Steps are derived from the selection, never stored. Selecting an
/// upstream value always discards everything below it, even when the value
/// is unchanged, so dependent choices are re-derived by the user. A
/// successful confirmation hands the summary to the caller and returns the
/// wizard to step 1; there is no terminal state.
pub struct BookingWizard {
    catalog: Catalog,
    locale: Locale,
    selection: BookingSelection,
}

impl BookingWizard {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            locale: Locale::default(),
            selection: BookingSelection::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &BookingSelection {
        &self.selection
    }

    pub fn step(&self) -> WizardStep {
        self.selection.step()
    }

    /// Step 1. Always applies; any previous facility, date, and time are
    /// discarded unconditionally.
    pub fn select_service(&mut self, service: ServiceKind) {
        self.selection = BookingSelection::with_service(service);
        tracing::debug!(service = service.id(), "service selected");
    }

    /// Step 2. Rejected (no-op, returns `false`) until a service is chosen;
    /// the interactive front-end gates the option list the same way.
    pub fn select_facility(&mut self, facility_id: &str) -> bool {
        if self.selection.service.is_none() {
            return false;
        }
        self.selection = self.selection.with_facility(facility_id);
        tracing::debug!(facility = facility_id, "facility selected");
        true
    }

    /// Step 3. Rejected until a facility is chosen.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if self.selection.facility.is_none() {
            return false;
        }
        self.selection = self.selection.with_date(date);
        tracing::debug!(%date, "date selected");
        true
    }

    /// Step 4. Rejected until a date is chosen.
    pub fn select_time(&mut self, time: NaiveTime) -> bool {
        if self.selection.date.is_none() {
            return false;
        }
        self.selection = self.selection.with_time(time);
        tracing::debug!(time = %time.format("%H:%M"), "time selected");
        true
    }

    /// Review-step projection; `None` while the selection is incomplete.
    pub fn summary(&self) -> Option<BookingSummary> {
        summarize(&self.selection, &self.catalog, self.locale)
    }

    /// Confirms the booking. On success the summary of the confirmed
    /// selection is returned and the wizard resets to step 1. An incomplete
    /// selection is reported without touching any state.
    pub fn confirm(&mut self) -> Result<BookingSummary, BookingError> {
        let summary = self.summary().ok_or(BookingError::IncompleteSelection)?;
        self.selection = BookingSelection::default();
        tracing::info!(
            service = %summary.service,
            facility = %summary.facility,
            "booking confirmed"
        );
        Ok(summary)
    }

    /// Discards every choice and returns to step 1.
    pub fn restart(&mut self) {
        self.selection = BookingSelection::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> BookingWizard {
        BookingWizard::new(Catalog::default())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn selections_out_of_order_are_rejected() {
        let mut wizard = wizard();
        assert!(!wizard.select_facility("1"));
        assert!(!wizard.select_date(date(2025, 9, 25)));
        assert!(!wizard.select_time(time(8, 0)));
        assert_eq!(wizard.selection(), &BookingSelection::default());
    }

    #[test]
    fn confirm_without_time_reports_incomplete_and_keeps_state() {
        let mut wizard = wizard();
        wizard.select_service(ServiceKind::Consultation);
        assert!(wizard.select_facility("1"));
        assert!(wizard.select_date(date(2025, 9, 25)));

        let before = wizard.selection().clone();
        assert_eq!(wizard.confirm(), Err(BookingError::IncompleteSelection));
        assert_eq!(wizard.selection(), &before);
    }

    #[test]
    fn confirm_resets_to_step_one() {
        let mut wizard = wizard();
        wizard.select_service(ServiceKind::Consultation);
        assert!(wizard.select_facility("2"));
        assert!(wizard.select_date(date(2025, 9, 27)));
        assert!(wizard.select_time(time(10, 0)));
        assert_eq!(wizard.step().number(), 5);

        let summary = wizard.confirm().expect("complete selection confirms");
        assert_eq!(summary.facility, "Hospital Santa Maria");
        assert_eq!(wizard.step().number(), 1);
        assert_eq!(wizard.selection(), &BookingSelection::default());
    }

    #[test]
    fn reselecting_service_always_clears_downstream() {
        let mut wizard = wizard();
        wizard.select_service(ServiceKind::Exam);
        assert!(wizard.select_facility("1"));

        // A different service resets; so does re-picking the same one.
        wizard.select_service(ServiceKind::Procedure);
        assert_eq!(wizard.step().number(), 2);
        assert_eq!(wizard.selection().facility, None);

        assert!(wizard.select_facility("3"));
        wizard.select_service(ServiceKind::Procedure);
        assert_eq!(wizard.selection().facility, None);
    }
}
