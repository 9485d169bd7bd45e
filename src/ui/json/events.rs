//! Event types for `--json` output.

use serde::Serialize;

use litpatch::domain::value_objects::ContentHash;
use litpatch::{PatchError, PatchOutcome};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event carrying the result of a patch.
#[derive(Debug, Clone, Serialize)]
pub struct PatchEvent {
    pub event: &'static str,
    pub path: String,
    pub replacements: usize,
    pub changed: bool,
    pub written: bool,
    pub dry_run: bool,
    pub before_hash: ContentHash,
    pub after_hash: ContentHash,
}

impl PatchEvent {
    pub fn from_outcome(outcome: &PatchOutcome, dry_run: bool) -> Self {
        Self {
            event: "patch",
            path: outcome.path.display().to_string(),
            replacements: outcome.replacements,
            changed: outcome.changed(),
            written: outcome.written,
            dry_run,
            before_hash: outcome.before_hash(),
            after_hash: outcome.after_hash(),
        }
    }
}

/// Event emitted when a command completes successfully.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
        }
    }
}

/// Event emitted when the command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub kind: &'static str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn from_error(command: &'a str, err: &PatchError) -> Self {
        Self {
            event: "error",
            command,
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
