//! Common test utilities for litpatch CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory plus helpers to run the binary
//! - Fixtures: Reusable file contents

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
