//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - local file stager
//! - `archive/` - gzip tarball package writer
//! - `discovery/` - directory walker and API assembly filter
//! - `plugin/` - `.meta` based plugin flag
//! - `settings/` - TOML settings store

pub mod archive;
pub mod discovery;
pub mod fs;
pub mod plugin;
pub mod settings;

pub use archive::TarGzArchiveWriter;
pub use discovery::{DirectoryDiscoverer, GlobAssemblyFilter};
pub use fs::LocalStager;
pub use plugin::MetaPluginToggle;
pub use settings::TomlSettingsStore;
