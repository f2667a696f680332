//! Settings Store Implementations

mod toml_store;

pub use toml_store::TomlSettingsStore;
