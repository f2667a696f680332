//! Plugin Toggle Implementations

mod meta_toggle;

pub use meta_toggle::{MetaPluginToggle, DEFAULT_FLAG_KEY};
