//! modkit - Mod Tools package exporter
//!
//! modkit gathers a game project's shared modding runtime, project settings
//! and public API assemblies into a single redistributable "Mod Tools"
//! package. Discovered assemblies are staged next to the mod tool, tagged
//! with a deterministic identifier, archived and removed again.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ExportOptions, ExportOutcome, ExportPlan, ExportUseCase};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{Manifest, ManifestEntry, ModToolSettings, StagedAssembly};
pub use domain::value_objects::{derive_identifier, AssetIdentifier, EntryCategory};
pub use error::{ExportError, ExportResult};
