//! Domain Ports (Interfaces)
//!
//! Collaborators of the export use case. Infrastructure provides the
//! concrete implementations; tests provide in-memory ones.

pub mod archive_writer;
pub mod assembly_discoverer;
pub mod file_stager;
pub mod plugin_toggle;
pub mod settings_store;

pub use archive_writer::{ArchiveError, ArchiveWriter, PackageEntry};
pub use assembly_discoverer::{AssemblyDiscoverer, AssemblyFilter};
pub use file_stager::{FileStager, FsError, FsResult};
pub use plugin_toggle::{PluginError, PluginToggle};
pub use settings_store::{SettingsError, SettingsStore};
