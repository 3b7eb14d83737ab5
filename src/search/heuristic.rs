use crate::geometry::manhattan_distance;
use crate::grid::{Cell, Grid};


/// Estimate of the remaining cost from a state to the goal
/// A* only returns optimal paths when the estimate is admissible
pub trait Heuristic {
    fn estimate(&self, state: Cell) -> usize;
}

/// Any closure works as a heuristic, admissible or not
impl<F> Heuristic for F
where
    F: Fn(Cell) -> usize,
{
    fn estimate(&self, state: Cell) -> usize {
        self(state)
    }
}


/// Manhattan distance to a fixed goal
/// Admissible and consistent on a 4-connected unit cost grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Manhattan {
    goal: Cell,
}

impl Manhattan {

    pub fn new(goal: Cell) -> Self {
        Self { goal }
    }

    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.goal())
    }
}

impl Heuristic for Manhattan {
    fn estimate(&self, state: Cell) -> usize {
        manhattan_distance(
            state.row as i64,
            state.col as i64,
            self.goal.row as i64,
            self.goal.col as i64,
        ) as usize
    }
}
