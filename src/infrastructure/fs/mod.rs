//! File System Implementations
//!
//! Concrete implementations of the TextStore port.

mod local;

pub use local::LocalFs;
