//! Value Objects
//!
//! Immutable types that are defined by their value rather than identity.

mod hash;

pub use hash::ContentHash;
