//! Error types for modkit
//!
//! Library code returns [`ExportError`]; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for modkit operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Main error type for export operations
#[derive(Error, Debug)]
pub enum ExportError {
    /// A manifest path does not exist
    #[error("missing input: {path}")]
    MissingInput { path: PathBuf },

    /// Copy, write or delete failure
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bundling step failed
    #[error("failed to write archive {path}: {message}")]
    ArchiveFailure { path: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// The package file name would not be a plain name inside the output directory
    #[error("invalid package name '{name}': must be a single file name without path separators")]
    InvalidPackageName { name: String },

    /// Settings file could not be read or written
    #[error("settings error in {path}: {message}")]
    Settings { path: PathBuf, message: String },

    /// The exporter plugin flag could not be read or toggled
    #[error("plugin error for {path}: {message}")]
    Plugin { path: PathBuf, message: String },
}

impl ExportError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the failure was caused by a missing manifest input
    pub fn is_missing_input(&self) -> bool {
        matches!(self, ExportError::MissingInput { .. })
    }
}
