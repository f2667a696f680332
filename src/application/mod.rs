//! Application Layer
//!
//! Use cases that orchestrate domain ports.

pub mod export;

pub use export::{
    CleanupFailure, CleanupReport, ExportOptions, ExportOutcome, ExportPlan, ExportUseCase,
    PlannedAssembly, PluginGuard,
};
