//! PluginToggle port - the exporter plugin's "enabled for the editor" flag

use std::path::{Path, PathBuf};

/// Plugin flag errors
#[derive(Debug)]
pub enum PluginError {
    /// The plugin or its descriptor is missing
    NotFound(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl std::fmt::Display for PluginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginError::NotFound(path) => write!(f, "plugin not found: {}", path.display()),
            PluginError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for PluginError {}

impl From<std::io::Error> for PluginError {
    fn from(err: std::io::Error) -> Self {
        PluginError::Io(err)
    }
}

/// Reads and writes a plugin's editor-compatibility flag
pub trait PluginToggle {
    fn is_enabled(&self, plugin: &Path) -> Result<bool, PluginError>;

    /// Set the flag. Implementations do nothing when it already has that value.
    fn set_enabled(&self, plugin: &Path, enabled: bool) -> Result<(), PluginError>;
}
