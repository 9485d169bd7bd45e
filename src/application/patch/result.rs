//! Patch result types

use std::path::PathBuf;

use crate::domain::services::{DiffResult, Differ};
use crate::domain::value_objects::ContentHash;

/// Result of a patch operation
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    /// File that was patched
    pub path: PathBuf,
    /// Number of occurrences replaced
    pub replacements: usize,
    /// Whether the file was written (false on dry run)
    pub written: bool,
    /// Document as read
    pub original: String,
    /// Document after substitution
    pub patched: String,
}

impl PatchOutcome {
    /// Whether the substitution altered the text
    pub fn changed(&self) -> bool {
        self.original != self.patched
    }

    pub fn before_hash(&self) -> ContentHash {
        ContentHash::from_content(&self.original)
    }

    pub fn after_hash(&self) -> ContentHash {
        ContentHash::from_content(&self.patched)
    }

    /// Line diff between the original and patched text
    pub fn diff(&self) -> DiffResult {
        Differ::new().diff(&self.original, &self.patched)
    }
}
