//! ArchiveWriter port - abstraction over the package bundling step

use std::path::{Path, PathBuf};

/// One file to put into the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    /// Where to read the file from
    pub source: PathBuf,
    /// Path of the entry inside the archive
    pub name: PathBuf,
}

impl PackageEntry {
    pub fn new(source: impl Into<PathBuf>, name: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
        }
    }

    /// Entry for a path relative to `root`, read from `root.join(path)`.
    ///
    /// Absolute paths under `root` are stored relative to it; absolute paths
    /// outside `root` are stored by file name.
    pub fn relative_to(root: &Path, path: &Path) -> Self {
        if path.is_absolute() {
            let name = match path.strip_prefix(root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => path
                    .file_name()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| path.to_path_buf()),
            };
            Self::new(path, name)
        } else {
            Self::new(root.join(path), path)
        }
    }
}

/// Archive writer errors
#[derive(Debug)]
pub enum ArchiveError {
    /// Reading an input or writing the output failed
    Io(std::io::Error),
    /// The archive format rejected an entry
    Entry { name: PathBuf, message: String },
}

impl std::fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArchiveError::Io(err) => write!(f, "I/O error: {}", err),
            ArchiveError::Entry { name, message } => {
                write!(f, "cannot add {}: {}", name.display(), message)
            }
        }
    }
}

impl std::error::Error for ArchiveError {}

impl From<std::io::Error> for ArchiveError {
    fn from(err: std::io::Error) -> Self {
        ArchiveError::Io(err)
    }
}

/// Bundles files into a single package archive
pub trait ArchiveWriter {
    /// Write `entries` to `output`, in order.
    ///
    /// Implementations must not leave a partial archive at `output`, and must
    /// leave a pre-existing file there untouched unless the write succeeds.
    fn write_archive(&self, entries: &[PackageEntry], output: &Path) -> Result<(), ArchiveError>;
}
