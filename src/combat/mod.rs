//! Combat resolution: damage math and one-on-one bouts.

pub mod bout;
pub mod math;

pub use bout::*;
pub use math::*;
