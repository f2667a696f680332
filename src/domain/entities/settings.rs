//! ModToolSettings entity - product information shipped with the mod tools
//!
//! Modders' tooling reads the product name and the runtime version from this
//! file, so it is refreshed from the project before every export.

use serde::{Deserialize, Serialize};

/// Settings bundled into the package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModToolSettings {
    #[serde(default)]
    pub product_name: String,

    #[serde(default)]
    pub runtime_version: String,

    /// Keys this tool does not manage; written back untouched
    #[serde(flatten)]
    pub extra: toml::Table,
}

/// Outcome of [`update_settings`]
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsUpdate {
    pub settings: ModToolSettings,
    pub changed: bool,
}

/// Refresh product name and runtime version.
///
/// A field is replaced when it is empty or differs from the given value.
/// Everything else is carried over.
pub fn update_settings(
    current: &ModToolSettings,
    product_name: &str,
    runtime_version: &str,
) -> SettingsUpdate {
    let mut settings = current.clone();
    let mut changed = false;

    if settings.product_name.is_empty() || settings.product_name != product_name {
        settings.product_name = product_name.to_string();
        changed = true;
    }

    if settings.runtime_version.is_empty() || settings.runtime_version != runtime_version {
        settings.runtime_version = runtime_version.to_string();
        changed = true;
    }

    SettingsUpdate { settings, changed }
}
