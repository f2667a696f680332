//! Archive Writer Implementations

mod tar_gz;

pub use tar_gz::{list_entries, TarGzArchiveWriter};
