use std::{fs, path::Path, str::FromStr};

use log::debug;

use super::{Cell, Grid};
use crate::errors::GridError;


/// Parse a text maze
/// 'A' = start, 'B' = goal, ' ' = free, anything else = wall
/// Lines shorter than the widest one are padded with free cells
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(contents: &str) -> Result<Self, Self::Err> {

        // Marker counts are checked before layout so the error names the real problem
        let starts = contents.matches('A').count();
        if starts != 1 {
            return Err(GridError::StartCount(starts));
        }
        let goals = contents.matches('B').count();
        if goals != 1 {
            return Err(GridError::GoalCount(goals));
        }

        let lines: Vec<Vec<char>> = contents.lines().map(|line| line.chars().collect()).collect();
        let height = lines.len();
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);

        let mut walls = Vec::with_capacity(height * width);
        let mut start = None;
        let mut goal = None;

        for (row, line) in lines.iter().enumerate() {
            for col in 0..width {
                let wall = match line.get(col) {
                    Some('A') => {
                        start = Some(Cell::new(row, col));
                        false
                    }
                    Some('B') => {
                        goal = Some(Cell::new(row, col));
                        false
                    }
                    Some(' ') | None => false,
                    Some(_) => true,
                };
                walls.push(wall);
            }
        }

        // counts were checked above, so both are set unless the input had no rows
        let (Some(start), Some(goal)) = (start, goal) else {
            return Err(GridError::Empty);
        };

        debug!("parsed {height}x{width} grid, start {start}, goal {goal}");
        Grid::new(height, width, walls, start, goal)
    }
}

impl Grid {

    /// Read and parse a maze file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        let contents = fs::read_to_string(path)?;
        contents.parse()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_markers_and_walls() {
        let grid: Grid = "A #\n  #\n# B".parse().unwrap();

        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.start(), Cell::new(0, 0));
        assert_eq!(grid.goal(), Cell::new(2, 2));
        assert!(grid.blocked(Cell::new(0, 2)));
        assert!(grid.blocked(Cell::new(2, 0)));
        assert!(!grid.blocked(Cell::new(1, 1)));
    }

    #[test]
    fn test_short_lines_are_padded_with_free_cells() {
        let grid: Grid = "A\n###B".parse().unwrap();

        assert_eq!(grid.width(), 4);
        assert!(!grid.blocked(Cell::new(0, 1)));
        assert!(!grid.blocked(Cell::new(0, 3)));
        assert!(grid.blocked(Cell::new(1, 0)));
    }

    #[test]
    fn test_any_other_character_is_a_wall() {
        let grid: Grid = "Ax.B".parse().unwrap();
        assert!(grid.blocked(Cell::new(0, 1)));
        assert!(grid.blocked(Cell::new(0, 2)));
    }

    #[test]
    fn test_marker_counts() {
        assert!(matches!("  B".parse::<Grid>(), Err(GridError::StartCount(0))));
        assert!(matches!("AA B".parse::<Grid>(), Err(GridError::StartCount(2))));
        assert!(matches!("A  ".parse::<Grid>(), Err(GridError::GoalCount(0))));
        assert!(matches!("A\nB\nB".parse::<Grid>(), Err(GridError::GoalCount(2))));
        assert!(matches!("".parse::<Grid>(), Err(GridError::StartCount(0))));
    }

    #[test]
    fn test_from_file_missing() {
        let result = Grid::from_file("/definitely/not/a/maze.txt");
        assert!(matches!(result, Err(GridError::Io(_))));
    }
}
