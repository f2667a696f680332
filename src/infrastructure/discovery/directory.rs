//! Directory-walking assembly discoverer

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::domain::ports::{AssemblyDiscoverer, AssemblyFilter, FsError, FsResult};

/// Walks a search root and keeps files accepted by the filter.
///
/// Results within a root are sorted by path. Hidden files and VCS ignore
/// files are not special-cased: everything under the root is considered.
pub struct DirectoryDiscoverer<F: AssemblyFilter> {
    filter: F,
    skip: Vec<PathBuf>,
}

impl<F: AssemblyFilter> DirectoryDiscoverer<F> {
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            skip: Vec::new(),
        }
    }

    /// Never report files under `dir` (e.g. the staging directory)
    pub fn skipping(mut self, dir: impl Into<PathBuf>) -> Self {
        self.skip.push(dir.into());
        self
    }

    fn is_skipped(&self, path: &Path) -> bool {
        self.skip.iter().any(|dir| path.starts_with(dir))
    }
}

impl<F: AssemblyFilter> AssemblyDiscoverer for DirectoryDiscoverer<F> {
    fn discover(&self, root: &Path) -> FsResult<Vec<PathBuf>> {
        if !root.is_dir() {
            debug!(root = %root.display(), "search root missing, skipping");
            return Ok(Vec::new());
        }

        let mut found = Vec::new();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .build();

        for entry in walker {
            let entry = entry.map_err(|e| {
                let io = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                FsError::from_io(root, io)
            })?;

            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if !is_file || self.is_skipped(entry.path()) {
                continue;
            }
            if self.filter.is_api_assembly(entry.path()) {
                found.push(entry.into_path());
            }
        }

        found.sort();
        debug!(root = %root.display(), count = found.len(), "discovered assemblies");
        Ok(found)
    }
}
