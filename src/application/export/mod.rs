//! Export Use Case
//!
//! Builds the Mod Tools package.
//!
//! This module handles:
//! - Refreshing the bundled mod tool settings
//! - Enabling the exporter plugin for the duration of the run
//! - Discovering and staging API assemblies with stable identifiers
//! - Writing the package and cleaning up staged files

mod guard;
mod options;
mod result;
mod use_case;

pub use guard::PluginGuard;
pub use options::ExportOptions;
pub use result::{CleanupFailure, CleanupReport, ExportOutcome, ExportPlan, PlannedAssembly};
pub use use_case::ExportUseCase;
