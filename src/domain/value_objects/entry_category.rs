//! Entry category value object - what role a file plays in the package
//!
//! - `Settings`: fixed settings files (mod tool settings, project settings)
//! - `SharedRuntime`: shared runtime binaries and docs shipped to modders
//! - `ApiAssembly`: a discovered game API assembly, staged per run
//! - `Metadata`: the side-car descriptor of a staged assembly

use serde::{Deserialize, Serialize};

/// Category of a manifest entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EntryCategory {
    #[default]
    Settings,
    SharedRuntime,
    ApiAssembly,
    Metadata,
}

impl EntryCategory {
    /// Returns true for entries produced during the run (staged files)
    pub fn is_staged(&self) -> bool {
        matches!(self, EntryCategory::ApiAssembly | EntryCategory::Metadata)
    }
}

impl std::fmt::Display for EntryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryCategory::Settings => write!(f, "settings"),
            EntryCategory::SharedRuntime => write!(f, "shared-runtime"),
            EntryCategory::ApiAssembly => write!(f, "api-assembly"),
            EntryCategory::Metadata => write!(f, "metadata"),
        }
    }
}
