use crate::grid::{Action, Cell};


/// A path from start to goal
/// The start cell is not part of `cells`, so both sequences have one entry per move
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    actions: Vec<Action>,
    cells: Vec<Cell>,
    expanded: usize, // nodes removed from the frontier, stale ones included
}

impl Solution {

    pub(crate) fn new(actions: Vec<Action>, cells: Vec<Cell>, expanded: usize) -> Self {
        debug_assert_eq!(actions.len(), cells.len());
        Self { actions, cells, expanded }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of expansions the search needed
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Path cost, every move costs 1
    pub fn cost(&self) -> usize {
        self.actions.len()
    }
}
