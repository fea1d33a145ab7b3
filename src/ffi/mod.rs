//! Foreign Function Interface for embedding the booking wizard in a mobile
//! shell. Exposes a stable C ABI over an opaque wizard handle; selection
//! entry points take catalog indices, matching how native pickers iterate
//! the option lists.

use std::ffi::CString;
use std::os::raw::c_char;
use std::sync::OnceLock;

use crate::booking::BookingWizard;
use crate::catalog::Catalog;
use crate::domain::ServiceKind;

/// Semantic version of the Rust core (mirrors `Cargo.toml`).
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Semantic version of the FFI surface. Bumps when the ABI contract changes.
pub const FFI_VERSION: &str = "0.1.0";

/// Status codes returned by the wizard entry points.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiStatus {
    Ok = 0,
    Rejected = 1,
    Incomplete = 2,
    BadIndex = 3,
    NullHandle = 4,
}

impl From<FfiStatus> for i32 {
    fn from(value: FfiStatus) -> Self {
        value as i32
    }
}

/// Returns the core (Rust) semantic version as a C string.
#[no_mangle]
pub extern "C" fn booking_core_version() -> *const c_char {
    static CORE: OnceLock<CString> = OnceLock::new();
    CORE.get_or_init(|| CString::new(CORE_VERSION).expect("static core version"))
        .as_ptr()
}

/// Returns the FFI interface semantic version as a C string.
#[no_mangle]
pub extern "C" fn booking_ffi_version() -> *const c_char {
    static FFI: OnceLock<CString> = OnceLock::new();
    FFI.get_or_init(|| CString::new(FFI_VERSION).expect("static ffi version"))
        .as_ptr()
}

/// Allocates a wizard over the built-in catalogs. Free with
/// [`booking_wizard_free`].
#[no_mangle]
pub extern "C" fn booking_wizard_new() -> *mut BookingWizard {
    Box::into_raw(Box::new(BookingWizard::new(Catalog::default())))
}

/// Releases a wizard created by [`booking_wizard_new`].
///
/// # Safety
/// `wizard` must be a pointer previously returned by `booking_wizard_new`
/// that has not been freed yet, or null.
#[no_mangle]
pub unsafe extern "C" fn booking_wizard_free(wizard: *mut BookingWizard) {
    if !wizard.is_null() {
        drop(Box::from_raw(wizard));
    }
}

/// Current 1-based step, or 0 for a null handle.
///
/// # Safety
/// `wizard` must be a live pointer from `booking_wizard_new`, or null.
#[no_mangle]
pub unsafe extern "C" fn booking_wizard_step(wizard: *const BookingWizard) -> u8 {
    match wizard.as_ref() {
        Some(wizard) => wizard.step().number(),
        None => 0,
    }
}

/// Selects the service at `index` in the service catalog.
///
/// # Safety
/// `wizard` must be a live pointer from `booking_wizard_new`, or null.
#[no_mangle]
pub unsafe extern "C" fn booking_wizard_select_service(
    wizard: *mut BookingWizard,
    index: i32,
) -> i32 {
    let Some(wizard) = wizard.as_mut() else {
        return FfiStatus::NullHandle.into();
    };
    let Some(kind) = usize::try_from(index)
        .ok()
        .and_then(|index| ServiceKind::ALL.get(index).copied())
    else {
        return FfiStatus::BadIndex.into();
    };
    wizard.select_service(kind);
    FfiStatus::Ok.into()
}

/// Selects the facility at `index` in the bookable-facility list.
///
/// # Safety
/// `wizard` must be a live pointer from `booking_wizard_new`, or null.
#[no_mangle]
pub unsafe extern "C" fn booking_wizard_select_facility(
    wizard: *mut BookingWizard,
    index: i32,
) -> i32 {
    let Some(wizard) = wizard.as_mut() else {
        return FfiStatus::NullHandle.into();
    };
    let Some(id) = usize::try_from(index).ok().and_then(|index| {
        wizard
            .catalog()
            .bookable_facilities()
            .nth(index)
            .map(|facility| facility.id.clone())
    }) else {
        return FfiStatus::BadIndex.into();
    };
    if wizard.select_facility(&id) {
        FfiStatus::Ok.into()
    } else {
        FfiStatus::Rejected.into()
    }
}

/// Selects the candidate date at `index`.
///
/// # Safety
/// `wizard` must be a live pointer from `booking_wizard_new`, or null.
#[no_mangle]
pub unsafe extern "C" fn booking_wizard_select_date(wizard: *mut BookingWizard, index: i32) -> i32 {
    let Some(wizard) = wizard.as_mut() else {
        return FfiStatus::NullHandle.into();
    };
    let Some(date) = usize::try_from(index)
        .ok()
        .and_then(|index| wizard.catalog().dates().get(index).copied())
    else {
        return FfiStatus::BadIndex.into();
    };
    if wizard.select_date(date) {
        FfiStatus::Ok.into()
    } else {
        FfiStatus::Rejected.into()
    }
}

/// Selects the time slot at `index`.
///
/// # Safety
/// `wizard` must be a live pointer from `booking_wizard_new`, or null.
#[no_mangle]
pub unsafe extern "C" fn booking_wizard_select_time(wizard: *mut BookingWizard, index: i32) -> i32 {
    let Some(wizard) = wizard.as_mut() else {
        return FfiStatus::NullHandle.into();
    };
    let Some(time) = usize::try_from(index)
        .ok()
        .and_then(|index| wizard.catalog().times().get(index).copied())
    else {
        return FfiStatus::BadIndex.into();
    };
    if wizard.select_time(time) {
        FfiStatus::Ok.into()
    } else {
        FfiStatus::Rejected.into()
    }
}

/// Confirms the booking, resetting the wizard on success.
///
/// # Safety
/// `wizard` must be a live pointer from `booking_wizard_new`, or null.
#[no_mangle]
pub unsafe extern "C" fn booking_wizard_confirm(wizard: *mut BookingWizard) -> i32 {
    let Some(wizard) = wizard.as_mut() else {
        return FfiStatus::NullHandle.into();
    };
    match wizard.confirm() {
        Ok(_) => FfiStatus::Ok.into(),
        Err(_) => FfiStatus::Incomplete.into(),
    }
}

/// Review-step summary as a JSON document, or null while incomplete. Free
/// with [`booking_string_free`].
///
/// # Safety
/// `wizard` must be a live pointer from `booking_wizard_new`, or null.
#[no_mangle]
pub unsafe extern "C" fn booking_wizard_summary_json(
    wizard: *const BookingWizard,
) -> *mut c_char {
    let Some(wizard) = wizard.as_ref() else {
        return std::ptr::null_mut();
    };
    let Some(summary) = wizard.summary() else {
        return std::ptr::null_mut();
    };
    serde_json::to_string(&summary)
        .ok()
        .and_then(|json| CString::new(json).ok())
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}

/// Releases a string returned by [`booking_wizard_summary_json`].
///
/// # Safety
/// `value` must be a pointer previously returned by this module that has
/// not been freed yet, or null.
#[no_mangle]
pub unsafe extern "C" fn booking_string_free(value: *mut c_char) {
    if !value.is_null() {
        drop(CString::from_raw(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_versions() {
        assert!(!booking_core_version().is_null());
        assert!(!booking_ffi_version().is_null());
    }

    #[test]
    fn drives_a_full_flow_over_the_abi() {
        unsafe {
            let wizard = booking_wizard_new();
            assert_eq!(booking_wizard_step(wizard), 1);
            assert_eq!(booking_wizard_confirm(wizard), FfiStatus::Incomplete as i32);

            assert_eq!(booking_wizard_select_service(wizard, 0), FfiStatus::Ok as i32);
            assert_eq!(booking_wizard_select_facility(wizard, 1), FfiStatus::Ok as i32);
            assert_eq!(booking_wizard_select_date(wizard, 2), FfiStatus::Ok as i32);
            assert_eq!(booking_wizard_select_time(wizard, 2), FfiStatus::Ok as i32);
            assert_eq!(booking_wizard_step(wizard), 5);

            let json = booking_wizard_summary_json(wizard);
            assert!(!json.is_null());
            booking_string_free(json);

            assert_eq!(booking_wizard_confirm(wizard), FfiStatus::Ok as i32);
            assert_eq!(booking_wizard_step(wizard), 1);
            booking_wizard_free(wizard);
        }
    }

    #[test]
    fn rejects_bad_indices_and_null_handles() {
        unsafe {
            assert_eq!(booking_wizard_step(std::ptr::null()), 0);
            assert_eq!(
                booking_wizard_select_service(std::ptr::null_mut(), 0),
                FfiStatus::NullHandle as i32
            );

            let wizard = booking_wizard_new();
            assert_eq!(
                booking_wizard_select_service(wizard, 7),
                FfiStatus::BadIndex as i32
            );
            assert_eq!(
                booking_wizard_select_facility(wizard, 0),
                FfiStatus::Rejected as i32
            );
            booking_wizard_free(wizard);
        }
    }
}
