use rand::Rng;

use super::{Cell, Grid};
use crate::errors::GridError;


/// Random grid with independently placed walls
/// Start is the top-left corner, goal the bottom-right corner, both always free
/// wall_density is the probability of each other cell being a wall, clamped to [0, 1]
/// No guarantee that the goal is reachable
pub fn scatter<R: Rng>(height: usize, width: usize, wall_density: f64, rng: &mut R) -> Result<Grid, GridError> {
    let start = Cell::new(0, 0);
    let goal = Cell::new(height.saturating_sub(1), width.saturating_sub(1));
    let p = if wall_density.is_nan() { 0.0 } else { wall_density.clamp(0.0, 1.0) };

    let area = height.checked_mul(width).ok_or(GridError::TooLarge { height, width })?;
    let walls = (0..area)
        .map(|i| {
            let cell = Cell::new(i / width, i % width);
            cell != start && cell != goal && rng.random_bool(p)
        })
        .collect();

    Grid::new(height, width, walls, start, goal)
}
