//! Command handlers for the modkit binary

pub mod export;
pub mod identifier;
pub mod manifest;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use modkit::config::{Config, ConfigWarning};

/// Load `<project>/modkit.toml` (or defaults) with environment overrides and
/// report unknown keys
pub fn load_config(project: &Path) -> Result<Config> {
    let (config, warnings) = Config::load_or_default(project)
        .with_context(|| format!("loading configuration for {}", project.display()))?;
    print_config_warnings(&warnings);
    Ok(config)
}

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        eprintln!("⚠ {}", w);
    }
}

/// Canonical form of a user-supplied directory
pub fn absolute(path: &Path) -> Result<PathBuf> {
    path.canonicalize()
        .with_context(|| format!("resolving {}", path.display()))
}
