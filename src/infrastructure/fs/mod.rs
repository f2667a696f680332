//! File System Implementations
//!
//! Concrete implementations of the FileStager port.

mod local;

pub use local::{atomic_write, LocalStager};
