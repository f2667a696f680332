//! TOML Settings Store
//!
//! Implements the SettingsStore port. Keys this tool does not manage are
//! kept and written back.

use std::path::Path;

use crate::domain::entities::ModToolSettings;
use crate::domain::ports::{FileStager, FsError, SettingsError, SettingsStore};
use crate::infrastructure::fs::LocalStager;

/// TOML-based settings store
pub struct TomlSettingsStore<FS: FileStager = LocalStager> {
    fs: FS,
}

impl TomlSettingsStore {
    pub fn new() -> Self {
        Self { fs: LocalStager::new() }
    }
}

impl Default for TomlSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<FS: FileStager> TomlSettingsStore<FS> {
    /// Create with a custom file stager (for testing)
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }
}

impl<FS: FileStager> SettingsStore for TomlSettingsStore<FS> {
    fn load(&self, path: &Path) -> Result<ModToolSettings, SettingsError> {
        let content = match self.fs.read(path) {
            Ok(content) => content,
            Err(FsError::NotFound(_)) => return Ok(ModToolSettings::default()),
            Err(e) => return Err(SettingsError::Io(std::io::Error::other(e.to_string()))),
        };
        toml::from_str(&content).map_err(|e| SettingsError::InvalidFormat(e.to_string()))
    }

    fn save(&self, path: &Path, settings: &ModToolSettings) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(settings)
            .map_err(|e| SettingsError::InvalidFormat(e.to_string()))?;
        self.fs
            .write(path, &content)
            .map_err(|e| SettingsError::Io(std::io::Error::other(e.to_string())))
    }
}
