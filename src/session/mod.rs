//! Explicitly-scoped session state.
//!
//! The signed-in patient lives here, not in a module-level singleton: the
//! store is constructed at application start, restored from the local
//! cache, and torn down on sign-out.

use crate::domain::{Patient, Registration};
use crate::errors::CoreError;
use crate::services::{AuthService, ServiceResult};
use crate::storage::StorageBackend;

/// Facade that coordinates the signed-in profile and its persistence.
pub struct SessionStore {
    current: Option<Patient>,
    storage: Box<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            current: None,
            storage,
        }
    }

    /// Loads a previously-cached profile, if any. Called once at startup.
    pub fn restore(&mut self) -> Result<bool, CoreError> {
        match self.storage.load_profile()? {
            Some(patient) => {
                tracing::info!(email = %patient.email, "session restored from cache");
                self.current = Some(patient);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Signs in with the mock credential check and caches the profile.
    pub fn sign_in(&mut self, email: &str, password: &str) -> ServiceResult<Patient> {
        let patient = AuthService::authenticate(email, password)?;
        self.storage.save_profile(&patient)?;
        tracing::info!(email = %patient.email, "signed in");
        self.current = Some(patient.clone());
        Ok(patient)
    }

    /// Registers a new patient, caches the profile, and signs the session in.
    pub fn sign_up(&mut self, registration: &Registration) -> ServiceResult<Patient> {
        let patient = AuthService::register(registration)?;
        self.storage.save_profile(&patient)?;
        tracing::info!(email = %patient.email, "registered and signed in");
        self.current = Some(patient.clone());
        Ok(patient)
    }

    /// Clears the in-memory session and removes the cached profile.
    pub fn sign_out(&mut self) -> Result<(), CoreError> {
        self.storage.clear_profile()?;
        if let Some(patient) = self.current.take() {
            tracing::info!(email = %patient.email, "signed out");
        }
        Ok(())
    }

    pub fn current(&self) -> Option<&Patient> {
        self.current.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }
}
