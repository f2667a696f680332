//! Configuration module for modkit
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MODKIT_*)
//! 3. Project config (<project>/modkit.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, parse_with_warnings, resolve_product_name, resolve_runtime_version,
    ConfigWarning, UNKNOWN_RUNTIME_VERSION,
};
pub use types::{
    AssembliesConfig, Config, ManifestConfig, PackageConfig, PathsConfig, PluginConfig,
    ProductConfig, CONFIG_FILE_NAME,
};
