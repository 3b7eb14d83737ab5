pub mod generate;
mod parse;
mod render;

pub use render::render;

use std::fmt;

use crate::errors::GridError;


/// A grid cell, the search state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


/// Primitive orthogonal move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {

    /// Enumeration order used for neighbor generation
    /// DFS/BFS tie-breaking depends on it
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    pub fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        }
    }

    /// Cell reached by taking this move from `cell`
    /// Returns None when the move leaves the top or left edge
    /// Bottom/right edges depend on the grid and are checked by Grid::neighbors
    pub fn apply(self, cell: Cell) -> Option<Cell> {
        let Cell { row, col } = cell;
        match self {
            Action::Up => row.checked_sub(1).map(|r| Cell::new(r, col)),
            Action::Down => Some(Cell::new(row + 1, col)),
            Action::Left => col.checked_sub(1).map(|c| Cell::new(row, c)),
            Action::Right => Some(Cell::new(row, col + 1)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// Immutable 4-connected grid with walls, one start and one goal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    walls: Vec<bool>, // row major, true = blocked
    start: Cell,
    goal: Cell,
}

impl Grid {

    /// Create a grid from a row-major wall map
    /// start and goal must be inside the grid and free
    /// start == goal is accepted, search then returns an empty path
    pub fn new(height: usize, width: usize, walls: Vec<bool>, start: Cell, goal: Cell) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }
        let area = height.checked_mul(width).ok_or(GridError::TooLarge { height, width })?;
        if walls.len() != area {
            return Err(GridError::WallCount { expected: area, got: walls.len() });
        }

        let grid = Self { height, width, walls, start, goal };
        for cell in [start, goal] {
            if !grid.in_bounds(cell) {
                return Err(GridError::OutOfBounds { cell, height, width });
            }
            if grid.blocked(cell) {
                return Err(GridError::Blocked(cell));
            }
        }
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells, walls included
    pub fn area(&self) -> usize {
        self.height * self.width
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Cells outside the grid count as blocked
    pub fn blocked(&self, cell: Cell) -> bool {
        !self.in_bounds(cell) || self.walls[cell.row * self.width + cell.col]
    }

    /// Valid moves from `cell`: in bounds and not a wall
    /// Always enumerated as up, down, left, right
    pub fn neighbors(&self, cell: Cell) -> Vec<(Action, Cell)> {
        Action::ALL
            .iter()
            .filter_map(|&action| action.apply(cell).map(|next| (action, next)))
            .filter(|&(_, next)| !self.blocked(next))
            .collect()
    }
}
