//! Patch Use Case
//!
//! Applies one literal substitution rule to one file:
//! - Reading the whole document through the `TextStore` port
//! - Replacing every occurrence of the match literal
//! - Writing the result back in place (skipped on dry run)

mod options;
mod result;
mod use_case;


pub use options::PatchOptions;
pub use result::PatchOutcome;
pub use use_case::PatchUseCase;
