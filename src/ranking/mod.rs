//! Ranking a roster by simulated combat.
//!
//! Two strategies are available. `Pairwise` feeds the bout resolver straight
//! into a merge sort; since combat outcomes can form cycles the result is a
//! best-effort order. `RoundRobin` counts wins over all pairs and sorts on
//! the tally, which is always a consistent order.

pub mod logic;
pub mod sort;
pub mod standings;

pub use logic::*;
pub use sort::merge_sort_by;
pub use standings::{Standing, Standings};
