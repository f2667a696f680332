//! Local File System Stager
//!
//! Implements the FileStager port for local disk operations.

use std::io::Write;
use std::path::Path;

use crate::domain::ports::file_stager::{FileStager, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the target directory and a rename, so a
/// reader never sees a half-written file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStager;

impl LocalStager {
    /// Create a new LocalStager instance
    pub fn new() -> Self {
        Self
    }
}

impl FileStager for LocalStager {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn copy(&self, source: &Path, destination: &Path) -> FsResult<()> {
        ensure_parent(destination)?;
        std::fs::copy(source, destination)
            .map(|_| ())
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound if !source.exists() => {
                    FsError::NotFound(source.to_path_buf())
                }
                _ => FsError::from_io(destination, e),
            })
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        atomic_write(path, content.as_bytes())
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::from_io(path, e))
    }
}

/// Write `content` to `path` via temp file + rename
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let dir = ensure_parent(path)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| FsError::from_io(path, e))?;
    tmp.write_all(content)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| FsError::from_io(path, e))?;
    tmp.persist(path)
        .map(|_| ())
        .map_err(|e| FsError::from_io(path, e.error))
}

fn ensure_parent(path: &Path) -> FsResult<&Path> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;
            Ok(parent)
        }
        _ => Ok(Path::new(".")),
    }
}
