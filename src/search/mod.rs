//! Uninformed and informed search over a Grid
//! All strategies share one loop (engine), they differ in the frontier and
//! in how already explored states are handled

pub mod engine;
pub mod frontier;
pub mod heuristic;
pub mod node;
mod solution;

pub use engine::{SearchEngine, Strategy};
pub use heuristic::{Heuristic, Manhattan};
pub use solution::Solution;
