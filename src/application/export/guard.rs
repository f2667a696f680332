//! Scoped plugin enablement
//!
//! The exporter plugin is enabled while a package is built and put back the
//! way it was afterwards, whichever way the run ends.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::ports::{PluginError, PluginToggle};

/// Enables a plugin on creation and restores its previous flag on drop
pub struct PluginGuard<'a, PT: PluginToggle> {
    toggle: &'a PT,
    plugin: PathBuf,
    previous: bool,
    restored: bool,
}

impl<'a, PT: PluginToggle> PluginGuard<'a, PT> {
    /// Remember the current flag, then enable the plugin
    pub fn acquire(toggle: &'a PT, plugin: &Path) -> Result<Self, PluginError> {
        let previous = toggle.is_enabled(plugin)?;
        toggle.set_enabled(plugin, true)?;
        debug!(plugin = %plugin.display(), previous, "plugin enabled for export");
        Ok(Self {
            toggle,
            plugin: plugin.to_path_buf(),
            previous,
            restored: false,
        })
    }

    /// Flag value before the guard was acquired
    pub fn previous(&self) -> bool {
        self.previous
    }

    /// Restore the previous flag now and report failure
    pub fn restore(mut self) -> Result<(), PluginError> {
        self.restored = true;
        self.toggle.set_enabled(&self.plugin, self.previous)
    }
}

impl<PT: PluginToggle> Drop for PluginGuard<'_, PT> {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = self.toggle.set_enabled(&self.plugin, self.previous) {
            warn!(plugin = %self.plugin.display(), error = %e, "failed to restore plugin flag");
        }
    }
}
