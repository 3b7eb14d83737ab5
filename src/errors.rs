use thiserror::Error;

use crate::grid::Cell;


/// Malformed grid input
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid must have exactly one start point (A), found {0}")]
    StartCount(usize),

    #[error("grid must have exactly one goal (B), found {0}")]
    GoalCount(usize),

    #[error("grid has no rows")]
    Empty,

    #[error("a {height}x{width} grid has more cells than fit in memory")]
    TooLarge { height: usize, width: usize },

    #[error("wall map has {got} cells, expected {expected}")]
    WallCount { expected: usize, got: usize },

    #[error("cell {cell} lies outside the {height}x{width} grid")]
    OutOfBounds { cell: Cell, height: usize, width: usize },

    #[error("cell {0} is a wall")]
    Blocked(Cell),

    #[error("failed to read grid: {0}")]
    Io(#[from] std::io::Error),
}


/// Failures of a single search run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Goal is unreachable, every reachable state was expanded
    #[error("no solution after {expanded} expansions")]
    NoSolution { expanded: usize },

    /// Caller supplied budget ran out before the goal was reached
    #[error("expansion limit of {limit} reached")]
    ExpansionLimit { limit: usize },

    /// remove() on an empty frontier
    #[error("empty frontier")]
    EmptyFrontier,

    /// A parent handle that does not exist in the node pool
    #[error("node {0} is not in the node pool")]
    DanglingParent(usize),
}


/// Constraint satisfaction failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CspError {
    #[error("variable {0} has no domain")]
    MissingDomain(String),

    #[error("no consistent assignment exists")]
    NoSolution,
}
