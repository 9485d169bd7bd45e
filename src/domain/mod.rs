//! Domain Layer
//!
//! Pure substitution logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `rule` - The substitution rule and literal replace-all
//! - `value_objects/` - Immutable value types (ContentHash)
//! - `services/` - Domain services (Differ)
//! - `ports/` - Interface definitions for infrastructure

pub mod ports;
pub mod rule;
pub mod services;
pub mod value_objects;
