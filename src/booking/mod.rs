//! The booking wizard: a small cyclic state machine that collects a
//! service, facility, date, and time in order, then confirms and resets.

pub mod selection;
pub mod summary;
pub mod wizard;

pub use selection::{BookingSelection, WizardStep};
pub use summary::BookingSummary;
pub use wizard::{BookingError, BookingWizard};
