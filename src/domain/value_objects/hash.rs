//! Content Hash Value Object
//!
//! SHA-256 fingerprint of a document, reported before and after patching so
//! callers can tell whether the bytes on disk actually changed.

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// `sha256:<hex>` digest of a text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    pub const PREFIX: &'static str = "sha256:";

    /// Hash the UTF-8 bytes of `content`
    pub fn from_content(content: &str) -> Self {
        let digest = Sha256::digest(content.as_bytes());
        Self(format!("{}{:x}", Self::PREFIX, digest))
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
