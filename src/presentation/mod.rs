//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Usage
//!
//! ```ignore
//! use modkit::presentation::factory;
//!
//! let use_case = factory::create_export_use_case(&config, &project_root)?;
//! let outcome = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use factory::create_export_use_case;
