//! FileStager port - abstraction over the file operations used while staging
//!
//! This trait lets the export use case copy, read, rewrite and delete staged
//! files without depending on a concrete implementation (local, mock).

use std::path::{Path, PathBuf};

/// Result type for staging operations
pub type FsResult<T> = Result<T, FsError>;

/// Staging operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Any other I/O error
    Io { path: PathBuf, source: std::io::Error },
}

impl FsError {
    /// Classify an I/O error for the path it happened on
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Path the failed operation was working on
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(path) | FsError::PermissionDenied(path) => path,
            FsError::Io { path, .. } => path,
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<FsError> for crate::error::ExportError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::NotFound(path) => crate::error::ExportError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            ),
            FsError::PermissionDenied(path) => crate::error::ExportError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
            ),
            FsError::Io { path, source } => crate::error::ExportError::io(path, source),
        }
    }
}

/// File operations needed to stage assemblies
///
/// Implementations:
/// - `LocalStager` - standard file I/O
/// - test mocks - in-memory
pub trait FileStager {
    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Copy `source` to `destination`, overwriting and creating parent directories
    fn copy(&self, source: &Path, destination: &Path) -> FsResult<()>;

    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file, replacing it
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;
}
