//! Domain Services

mod differ;

pub use differ::{DiffLine, DiffResult, DiffTag, Differ};
