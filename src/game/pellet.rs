use super::grid::{Grid, Position};
use super::snake::Snake;
use rand::Rng;

/// Pick a uniformly random cell of `grid` not occupied by `snake` by
/// sampling until one is free.
///
/// Returns `None` if the snake already fills the grid.
pub(crate) fn spawn<R: Rng>(snake: &Snake, grid: Grid, rng: &mut R) -> Option<Position> {
    if snake.len() >= grid.area() {
        return None;
    }
    let width = i32::from(grid.width());
    let height = i32::from(grid.height());
    loop {
        let pos = Position::new(rng.random_range(0..width), rng.random_range(0..height));
        if !snake.occupies(pos) {
            return Some(pos);
        }
    }
}
