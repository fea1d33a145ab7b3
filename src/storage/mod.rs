pub mod json_backend;

pub use json_backend::JsonStorage;

use std::path::PathBuf;

use crate::domain::Patient;
use crate::errors::CoreError;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Abstracts the local key-value cache holding the signed-in profile.
pub trait StorageBackend: Send + Sync {
    fn load_profile(&self) -> Result<Option<Patient>>;
    fn save_profile(&self, patient: &Patient) -> Result<()>;
    fn clear_profile(&self) -> Result<()>;
}

/// Resolves the application base directory.
///
/// Honors `BOOKING_CORE_HOME` for tests and sandboxed installs, otherwise
/// a dot-directory under the user's home.
pub fn resolve_base(root: Option<PathBuf>) -> PathBuf {
    if let Some(root) = root {
        return root;
    }
    if let Some(dir) = std::env::var_os("BOOKING_CORE_HOME") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".booking_core"))
        .unwrap_or_else(|| PathBuf::from(".booking_core"))
}

pub(crate) fn ensure_dir(path: &std::path::Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}
