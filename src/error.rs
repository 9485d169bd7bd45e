//! Error types for litpatch
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for patch operations
pub type PatchResult<T> = Result<T, PatchError>;

/// Main error type for patch operations
#[derive(Error, Debug)]
pub enum PatchError {
    /// Target file does not exist
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// Missing read or write permission on the target file
    #[error("permission denied: {path}")]
    AccessDenied { path: PathBuf },

    /// File bytes are not valid UTF-8
    #[error("{path} is not valid UTF-8 (invalid byte sequence at offset {offset})")]
    Decode { path: PathBuf, offset: usize },

    /// Match literal is empty
    #[error("match string must not be empty")]
    EmptyPattern,

    /// Any other IO error
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PatchError {
    /// Classify an IO error raised while touching `path`.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => PatchError::NotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => PatchError::AccessDenied {
                path: path.to_path_buf(),
            },
            _ => PatchError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Stable machine-readable name, used in JSON error events.
    pub fn kind(&self) -> &'static str {
        match self {
            PatchError::NotFound { .. } => "not_found",
            PatchError::AccessDenied { .. } => "access_denied",
            PatchError::Decode { .. } => "decode",
            PatchError::EmptyPattern => "empty_pattern",
            PatchError::Io { .. } => "io",
        }
    }
}
