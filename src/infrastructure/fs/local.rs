//! Local File System Implementation
//!
//! Implements the TextStore port for UTF-8 files on local disk.

use std::path::Path;

use crate::domain::ports::TextStore;
use crate::error::{PatchError, PatchResult};

/// Local UTF-8 text store
///
/// Reads whole files and decodes them strictly: invalid UTF-8 is an error,
/// never replaced lossily. Writes truncate the existing file in place, so its
/// permissions and identity are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl TextStore for LocalFs {
    fn read_text(&self, path: &Path) -> PatchResult<String> {
        let bytes = std::fs::read(path).map_err(|e| PatchError::from_io(path, e))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read file");

        String::from_utf8(bytes).map_err(|e| PatchError::Decode {
            path: path.to_path_buf(),
            offset: e.utf8_error().valid_up_to(),
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> PatchResult<()> {
        std::fs::write(path, content.as_bytes()).map_err(|e| PatchError::from_io(path, e))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }
}
