//! SettingsStore port - persistence for the bundled mod tool settings

use std::path::Path;

use crate::domain::entities::ModToolSettings;

/// Settings persistence errors
#[derive(Debug)]
pub enum SettingsError {
    /// Invalid settings format
    InvalidFormat(String),
    /// I/O error
    Io(std::io::Error),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::InvalidFormat(msg) => write!(f, "Invalid settings format: {}", msg),
            SettingsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Loads and saves [`ModToolSettings`]
pub trait SettingsStore {
    /// Load settings; a missing file yields defaults
    fn load(&self, path: &Path) -> Result<ModToolSettings, SettingsError>;

    fn save(&self, path: &Path, settings: &ModToolSettings) -> Result<(), SettingsError>;
}
