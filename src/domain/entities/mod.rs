//! Domain Entities
//!
//! - `Manifest` - ordered list of files that go into a package
//! - `StagedAssembly` - an assembly copied into the staging directory
//! - `ModToolSettings` - product settings shipped with the package

mod manifest;
mod settings;
mod staged_assembly;

pub use manifest::{Manifest, ManifestEntry};
pub use settings::{update_settings, ModToolSettings, SettingsUpdate};
pub use staged_assembly::{meta_path, StagedAssembly, META_EXTENSION};
