//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (rule, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PatchUseCase` - read a document, apply the substitution rule, write it back

pub mod patch;

pub use patch::{PatchOptions, PatchOutcome, PatchUseCase};
