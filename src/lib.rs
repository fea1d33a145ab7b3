#![doc(test(attr(deny(warnings))))]

//! Booking Core offers the appointment-booking domain, the guided booking
//! wizard, and the session primitives that power the interactive front-end.

pub mod booking;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod format;
pub mod services;
pub mod session;
pub mod storage;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Booking Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
