//! Terminal and JSON rendering for the CLI.

pub mod context;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
