pub mod appointment;
pub mod common;
pub mod facility;
pub mod patient;
pub mod service;

pub use appointment::{Appointment, AppointmentStatus};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use facility::{FacilityKind, FacilityOption};
pub use patient::{Patient, Registration};
pub use service::{ServiceKind, ServiceOption};
