use std::fmt;

use super::{Cell, Grid};
use crate::collections::FxHashSet;
use crate::search::Solution;


/// Draw the grid, marking the solution path with '*'
/// '#' wall, 'A' start, 'B' goal, '.' free
pub fn render(grid: &Grid, solution: Option<&Solution>) -> String {
    let path: FxHashSet<Cell> = solution
        .map(|s| s.cells().iter().copied().collect())
        .unwrap_or_default();

    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let cell = Cell::new(row, col);
            let c = if grid.blocked(cell) {
                '#'
            } else if cell == grid.start() {
                'A'
            } else if cell == grid.goal() {
                'B'
            } else if path.contains(&cell) {
                '*'
            } else {
                '.'
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, None))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SearchEngine, Strategy};

    #[test]
    fn test_render_without_solution() {
        let grid: Grid = "A #\n  #\n# B".parse().unwrap();
        assert_eq!(grid.to_string(), "A.#\n..#\n#.B\n");
    }

    #[test]
    fn test_render_marks_path() {
        let grid: Grid = "A #\n  #\n# B".parse().unwrap();
        let solution = SearchEngine::new(Strategy::BreadthFirst).solve(&grid).unwrap();

        // down, right, down, right
        assert_eq!(render(&grid, Some(&solution)), "A.#\n**#\n#*B\n");
    }
}
