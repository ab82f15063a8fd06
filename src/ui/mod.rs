//! Terminal and JSON output for the binary.

pub mod ci;
pub mod error;
pub mod json;
pub mod output;
pub mod terminal;
