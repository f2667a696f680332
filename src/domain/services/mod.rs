//! Domain Services
//!
//! Stateless transforms used by the export use case.

mod meta_descriptor;

pub use meta_descriptor::{
    default_descriptor, read_flag, read_identifier, rewrite_identifier, write_flag,
    DESCRIPTOR_FORMAT_VERSION, IDENTIFIER_KEY,
};
