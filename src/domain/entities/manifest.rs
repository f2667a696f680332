//! Manifest entity - the ordered list of files that go into a package
//!
//! Entries keep insertion order; the archive is written in that order.
//! Paths are stored as given (usually relative to the project root).

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::EntryCategory;

/// A single file included in the package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    path: PathBuf,
    category: EntryCategory,
}

impl ManifestEntry {
    pub fn new(path: impl Into<PathBuf>, category: EntryCategory) -> Self {
        Self {
            path: path.into(),
            category,
        }
    }

    pub fn settings(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryCategory::Settings)
    }

    pub fn shared_runtime(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryCategory::SharedRuntime)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn category(&self) -> EntryCategory {
        self.category
    }
}

/// Ordered collection of manifest entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter()
    }

    /// Paths in manifest order
    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }

    /// Entries of one category, in manifest order
    pub fn by_category(&self, category: EntryCategory) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ManifestEntry> for Manifest {
    fn from_iter<I: IntoIterator<Item = ManifestEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<ManifestEntry> for Manifest {
    fn extend<I: IntoIterator<Item = ManifestEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
