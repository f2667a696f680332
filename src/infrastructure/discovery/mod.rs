//! Assembly Discovery
//!
//! Directory walking plus the glob-based API assembly predicate.

mod directory;
mod filter;

pub use directory::DirectoryDiscoverer;
pub use filter::{GlobAssemblyFilter, PatternError, DEFAULT_EXCLUDE, DEFAULT_INCLUDE};
