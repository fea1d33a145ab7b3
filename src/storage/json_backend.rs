use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::Patient;
use crate::errors::CoreError;

use super::{ensure_dir, resolve_base, Result, StorageBackend};

const PROFILE_FILE: &str = "profile.json";
const TMP_SUFFIX: &str = "tmp";

pub const PROFILE_SCHEMA_VERSION: u32 = 1;

/// JSON-file implementation of the profile cache.
///
/// Writes stage through a sibling temp file and rename so a failed write
/// never corrupts the cached profile.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
    profile_file: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let app_root = resolve_base(root);
        ensure_dir(&app_root)?;
        let profile_file = app_root.join(PROFILE_FILE);
        Ok(Self {
            root: app_root,
            profile_file,
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn profile_path(&self) -> &Path {
        &self.profile_file
    }
}

impl StorageBackend for JsonStorage {
    fn load_profile(&self) -> Result<Option<Patient>> {
        if !self.profile_file.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.profile_file)?;
        let document: ProfileDocument = serde_json::from_str(&data)?;
        if document.schema_version > PROFILE_SCHEMA_VERSION {
            return Err(CoreError::Persistence(format!(
                "cached profile schema v{} is newer than supported v{}",
                document.schema_version, PROFILE_SCHEMA_VERSION
            )));
        }
        Ok(Some(document.patient))
    }

    fn save_profile(&self, patient: &Patient) -> Result<()> {
        let document = ProfileDocument {
            schema_version: PROFILE_SCHEMA_VERSION,
            patient: patient.clone(),
        };
        let json = serde_json::to_string_pretty(&document)?;
        let tmp = tmp_path(&self.profile_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.profile_file)?;
        Ok(())
    }

    fn clear_profile(&self) -> Result<()> {
        if self.profile_file.exists() {
            fs::remove_file(&self.profile_file)?;
        }
        Ok(())
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct ProfileDocument {
    schema_version: u32,
    patient: Patient,
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
