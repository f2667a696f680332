//! Gzip-compressed tar package writer
//!
//! Entries are written in manifest order with normalized headers (fixed
//! mtime, owner and mode) so the same inputs produce the same archive bytes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use flate2::{Compression, GzBuilder};
use tar::{Builder, Header};
use tracing::debug;

use crate::domain::ports::archive_writer::{ArchiveError, ArchiveWriter, PackageEntry};

/// Writes packages as `.tar.gz` streams
#[derive(Debug, Clone, Copy)]
pub struct TarGzArchiveWriter {
    compression: Compression,
}

impl Default for TarGzArchiveWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TarGzArchiveWriter {
    pub fn new() -> Self {
        Self {
            compression: Compression::default(),
        }
    }

    pub fn with_compression(mut self, level: u32) -> Self {
        self.compression = Compression::new(level.min(9));
        self
    }

    fn write_to<W: Write>(&self, writer: W, entries: &[PackageEntry]) -> Result<W, ArchiveError> {
        let encoder = GzBuilder::new().mtime(0).write(writer, self.compression);
        let mut builder = Builder::new(encoder);

        for entry in entries {
            let name = archive_name(&entry.name)?;
            let data = std::fs::read(&entry.source)?;

            let mut header = Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_mtime(0);
            header.set_uid(0);
            header.set_gid(0);
            header.set_entry_type(tar::EntryType::Regular);

            builder
                .append_data(&mut header, &name, data.as_slice())
                .map_err(|e| ArchiveError::Entry {
                    name: entry.name.clone(),
                    message: e.to_string(),
                })?;
            debug!(entry = %name, bytes = data.len(), "added archive entry");
        }

        let encoder = builder.into_inner()?;
        Ok(encoder.finish()?)
    }
}

impl ArchiveWriter for TarGzArchiveWriter {
    fn write_archive(&self, entries: &[PackageEntry], output: &Path) -> Result<(), ArchiveError> {
        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Built next to the destination and renamed into place on success;
        // dropping the temp file on any error removes it.
        let tmp = tempfile::Builder::new()
            .prefix(".modkit-")
            .suffix(".partial")
            .tempfile_in(dir)?;

        let writer = self.write_to(BufWriter::new(tmp.as_file()), entries)?;
        writer
            .into_inner()
            .map_err(|e| ArchiveError::Io(e.into_error()))?
            .sync_all()?;

        tmp.persist(output).map_err(|e| ArchiveError::Io(e.error))?;
        Ok(())
    }
}

/// Forward-slash entry name; rejects absolute and parent-relative paths
fn archive_name(name: &Path) -> Result<String, ArchiveError> {
    let mut parts = Vec::new();
    for component in name.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => {
                return Err(ArchiveError::Entry {
                    name: name.to_path_buf(),
                    message: "entry path must be relative and stay inside the package".into(),
                })
            }
        }
    }
    if parts.is_empty() {
        return Err(ArchiveError::Entry {
            name: PathBuf::from(name),
            message: "empty entry path".into(),
        });
    }
    Ok(parts.join("/"))
}

/// Names of the entries in a `.tar.gz` package, in archive order
pub fn list_entries(path: &Path) -> Result<Vec<String>, ArchiveError> {
    let file = File::open(path)?;
    let mut archive = tar::Archive::new(flate2::read::GzDecoder::new(file));
    let mut names = Vec::new();
    for entry in archive.entries()? {
        let entry = entry?;
        names.push(entry.path()?.to_string_lossy().replace('\\', "/"));
    }
    Ok(names)
}
