//! StagedAssembly entity - a discovered assembly copied into the staging directory
//!
//! Lives for a single export run: created by staging, tagged with its
//! identifier, archived, then removed during cleanup.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::AssetIdentifier;

/// Extension appended to an asset path to form its side-car descriptor
pub const META_EXTENSION: &str = "meta";

/// Path of the side-car descriptor for an asset (`Foo.dll` -> `Foo.dll.meta`)
pub fn meta_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".");
    os.push(META_EXTENSION);
    PathBuf::from(os)
}

/// An assembly staged for packaging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedAssembly {
    source: PathBuf,
    staged: PathBuf,
    identifier: AssetIdentifier,
}

impl StagedAssembly {
    /// Create a staged assembly, deriving its identifier from the staged file name
    pub fn new(source: impl Into<PathBuf>, staged: impl Into<PathBuf>) -> Self {
        let staged = staged.into();
        let identifier = AssetIdentifier::derive(&staged);
        Self {
            source: source.into(),
            staged,
            identifier,
        }
    }

    /// Original location of the assembly
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Location of the copy in the staging directory
    pub fn staged_path(&self) -> &Path {
        &self.staged
    }

    /// Location of the copy's side-car descriptor
    pub fn meta_path(&self) -> PathBuf {
        meta_path(&self.staged)
    }

    pub fn identifier(&self) -> &AssetIdentifier {
        &self.identifier
    }
}
