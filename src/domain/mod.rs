//! Domain Layer
//!
//! Pure packaging logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Manifest, StagedAssembly, ModToolSettings
//! - `value_objects/` - AssetIdentifier, EntryCategory
//! - `services/` - side-car descriptor editing
//! - `ports/` - interfaces implemented by infrastructure
//!
//! All I/O goes through trait-defined ports.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
