//! Plugin flag stored in the plugin's side-car descriptor
//!
//! The flag is a single `<key>: 0|1` line in `<plugin>.meta`. A descriptor
//! without the line, or no descriptor at all, reads as disabled.
//!
//! A descriptor created by enabling the flag is deleted again when the flag
//! is switched back off through the same toggle.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::meta_path;
use crate::domain::ports::{FileStager, FsError, PluginError, PluginToggle};
use crate::domain::services::{read_flag, write_flag};

/// Descriptor key used when none is configured
pub const DEFAULT_FLAG_KEY: &str = "compatibleWithEditor";

/// [`PluginToggle`] backed by `.meta` descriptor files
pub struct MetaPluginToggle<FS: FileStager> {
    fs: FS,
    key: String,
    created: RefCell<HashSet<PathBuf>>,
}

impl<FS: FileStager> MetaPluginToggle<FS> {
    pub fn new(fs: FS) -> Self {
        Self {
            fs,
            key: DEFAULT_FLAG_KEY.to_string(),
            created: RefCell::default(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Descriptor content, `None` when the plugin has no descriptor
    fn read_descriptor(&self, plugin: &Path) -> Result<Option<String>, PluginError> {
        if !self.fs.exists(plugin) {
            return Err(PluginError::NotFound(plugin.to_path_buf()));
        }
        match self.fs.read(&meta_path(plugin)) {
            Ok(content) => Ok(Some(content)),
            Err(FsError::NotFound(_)) => Ok(None),
            Err(e) => Err(io_error(e)),
        }
    }
}

fn io_error(err: FsError) -> PluginError {
    PluginError::Io(std::io::Error::other(err.to_string()))
}

impl<FS: FileStager> PluginToggle for MetaPluginToggle<FS> {
    fn is_enabled(&self, plugin: &Path) -> Result<bool, PluginError> {
        let content = self.read_descriptor(plugin)?;
        Ok(read_flag(content.as_deref().unwrap_or_default(), &self.key).unwrap_or(false))
    }

    fn set_enabled(&self, plugin: &Path, enabled: bool) -> Result<(), PluginError> {
        let existing = self.read_descriptor(plugin)?;
        let content = existing.as_deref().unwrap_or_default();
        if read_flag(content, &self.key).unwrap_or(false) == enabled {
            return Ok(());
        }

        let meta = meta_path(plugin);
        if !enabled && self.created.borrow_mut().remove(&meta) {
            self.fs.remove(&meta).map_err(io_error)?;
            debug!(plugin = %plugin.display(), "removed plugin descriptor created for the run");
            return Ok(());
        }

        let updated = write_flag(content, &self.key, enabled);
        self.fs.write(&meta, &updated).map_err(io_error)?;
        if existing.is_none() {
            self.created.borrow_mut().insert(meta);
        }
        debug!(plugin = %plugin.display(), enabled, "plugin flag updated");
        Ok(())
    }
}
