//! AssemblyDiscoverer port - finds the API assemblies to ship
//!
//! Whether a file is an "externally importable API assembly" is decided by an
//! [`AssemblyFilter`], which the discoverer receives from outside.

use std::path::{Path, PathBuf};

use super::file_stager::FsResult;

/// Predicate selecting API assemblies
pub trait AssemblyFilter {
    fn is_api_assembly(&self, path: &Path) -> bool;
}

impl<F> AssemblyFilter for F
where
    F: Fn(&Path) -> bool,
{
    fn is_api_assembly(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Scans one search root for assemblies
pub trait AssemblyDiscoverer {
    /// Assemblies under `root` accepted by the discoverer's filter.
    ///
    /// A root that does not exist yields an empty list.
    fn discover(&self, root: &Path) -> FsResult<Vec<PathBuf>>;
}
