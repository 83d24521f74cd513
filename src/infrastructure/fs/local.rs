//! Local File System Implementation
//!
//! Implements the RecordWriter port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::{RecordWriter, WriteResult};

/// Local file system implementation
///
/// Writes go to a temp file in the target directory and are renamed into
/// place, so a reader never sees a half-written snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

/// Write `content` to `path` atomically, creating parent directories.
pub fn atomic_write(path: &Path, content: &[u8]) -> WriteResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl RecordWriter for LocalFs {
    fn write(&self, path: &Path, content: &str) -> WriteResult<()> {
        atomic_write(path, content.as_bytes())
    }

    fn read(&self, path: &Path) -> WriteResult<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
