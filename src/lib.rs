//! litpatch - literal in-place text substitution
//!
//! Reads one text file, replaces every literal occurrence of a match string
//! with a replacement string, and writes the result back to the same path.
//!
//! The binary ships with a built-in rule (see [`domain::rule`]) so that it
//! can be run with no arguments.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::patch::{PatchOptions, PatchOutcome, PatchUseCase};
pub use domain::ports::TextStore;
pub use domain::rule::{Substitution, SubstitutionRule};
pub use error::{PatchError, PatchResult};
pub use infrastructure::fs::LocalFs;
