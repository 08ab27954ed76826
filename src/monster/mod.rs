//! Monster reference data and the built-in roster.

pub mod roster;
pub mod types;

pub use roster::*;
pub use types::*;
