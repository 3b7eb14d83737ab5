//! Path search on 2D grid mazes
//!
//! A [`grid::Grid`] is searched with depth-first, breadth-first or A* search
//! through one [`search::SearchEngine`]. The [`csp`] module holds a plain
//! backtracking solver for binary constraint problems.
//!
//! ```
//! use gridsearch::grid::Grid;
//! use gridsearch::search::{SearchEngine, Strategy};
//!
//! let grid: Grid = "A #\n  #\n# B".parse().unwrap();
//! let solution = SearchEngine::new(Strategy::a_star(&grid)).solve(&grid).unwrap();
//! assert_eq!(solution.cost(), 4);
//! ```

pub mod collections;
pub mod csp;
pub mod errors;
pub mod geometry;
pub mod grid;
pub mod search;
