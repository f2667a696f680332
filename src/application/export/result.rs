//! Export result types

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::{ManifestEntry, StagedAssembly};

/// A staged file that could not be removed during cleanup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Result of removing staged files
#[derive(Debug, Clone, Default)]
pub struct CleanupReport {
    pub removed: Vec<PathBuf>,
    pub failures: Vec<CleanupFailure>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A discovered assembly and where it will be staged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedAssembly {
    pub source: PathBuf,
    pub staged: PathBuf,
    pub identifier: String,
}

/// What an export would package, without touching anything
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportPlan {
    pub package_path: PathBuf,
    pub entries: Vec<ManifestEntry>,
    pub assemblies: Vec<PlannedAssembly>,
}

/// Outcome of a successful export
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub package_path: PathBuf,
    /// Entries written to the package, in archive order
    pub entries: Vec<ManifestEntry>,
    /// Assemblies staged (and removed again) during the run
    pub staged: Vec<StagedAssembly>,
    pub settings_changed: bool,
    pub cleanup: CleanupReport,
}

impl ExportOutcome {
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// JSON summary for `--json` output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "event": "export",
            "status": if self.cleanup.is_clean() { "success" } else { "partial" },
            "package": self.package_path.display().to_string(),
            "entries": self.entries.len(),
            "staged": self.staged.iter().map(|s| serde_json::json!({
                "source": s.source().display().to_string(),
                "identifier": s.identifier().as_str(),
            })).collect::<Vec<_>>(),
            "settings_changed": self.settings_changed,
            "cleanup_failures": self.cleanup.failures,
        })
    }
}
