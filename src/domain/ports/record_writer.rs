//! RecordWriter port - abstraction over record file I/O
//!
//! Lets the record store persist snapshots without depending on the local
//! disk (tests use an in-memory implementation).

use std::path::Path;

/// Result type for record writer operations
pub type WriteResult<T> = Result<T, std::io::Error>;

/// Abstract persistence for record snapshots
///
/// Implementations:
/// - `LocalFs` - atomic tempfile + rename on local disk
/// - in-memory maps in tests
pub trait RecordWriter {
    /// Replace the full content at `path`. Readers observe either the old
    /// content or the new content, never a mix.
    fn write(&self, path: &Path, content: &str) -> WriteResult<()>;

    /// Read the full content at `path`
    fn read(&self, path: &Path) -> WriteResult<String>;

    /// Check if `path` exists
    fn exists(&self, path: &Path) -> bool;
}

impl<T: RecordWriter + ?Sized> RecordWriter for &T {
    fn write(&self, path: &Path, content: &str) -> WriteResult<()> {
        (**self).write(path, content)
    }

    fn read(&self, path: &Path) -> WriteResult<String> {
        (**self).read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
