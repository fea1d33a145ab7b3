pub mod appointment_service;
pub mod auth_service;
pub mod directory_service;

pub use appointment_service::AppointmentService;
pub use auth_service::AuthService;
pub use directory_service::{DirectoryFilter, DirectoryService};

use crate::errors::CoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("{0}")]
    Invalid(String),
}
