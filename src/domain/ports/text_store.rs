//! TextStore port - whole-file text I/O
//!
//! The patch use case reads and writes documents only through this trait, so
//! it can run against the local disk or an in-memory store in tests.

use std::path::Path;

use crate::error::PatchResult;

/// Abstract text file store
///
/// Implementations:
/// - `LocalFs` - UTF-8 files on local disk
pub trait TextStore {
    /// Read the full content of `path` as text.
    ///
    /// Fails with `NotFound`, `AccessDenied` or `Decode`.
    fn read_text(&self, path: &Path) -> PatchResult<String>;

    /// Replace the full content of `path` with `content` (truncate-then-write).
    fn write_text(&self, path: &Path, content: &str) -> PatchResult<()>;
}

impl<T: TextStore + ?Sized> TextStore for &T {
    fn read_text(&self, path: &Path) -> PatchResult<String> {
        (**self).read_text(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> PatchResult<()> {
        (**self).write_text(path, content)
    }
}
