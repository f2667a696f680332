//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod entry_category;
mod identifier;

pub use entry_category::EntryCategory;
pub use identifier::{derive_identifier, AssetIdentifier};
