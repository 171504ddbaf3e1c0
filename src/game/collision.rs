use super::grid::{Grid, Position};
use super::snake::Snake;
use serde::Deserialize;

/// What the snake ran into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    /// The head would have left the grid
    Wall,

    /// The head would have landed on one of the snake's own segments
    SelfBite,
}

/// How a move into the cell currently holding the snake's tail is judged
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum CollisionPolicy {
    /// The candidate head is checked against the whole body as it is before
    /// the move, tail included.
    #[default]
    Strict,

    /// The tail cell counts as free when the tail is about to move out of it,
    /// i.e., when the snake is not growing this tick.
    TailVacates,
}

impl CollisionPolicy {
    /// Check whether moving the head of `snake` to `candidate` on `grid`
    /// would crash.  `growing` tells whether the snake keeps its tail this
    /// tick.
    pub(crate) fn check(
        self,
        candidate: Position,
        snake: &Snake,
        grid: Grid,
        growing: bool,
    ) -> Option<Collision> {
        if !grid.in_bounds(candidate) {
            return Some(Collision::Wall);
        }
        let bites = match self {
            CollisionPolicy::Strict => snake.occupies(candidate),
            CollisionPolicy::TailVacates => {
                snake.occupies(candidate) && (growing || candidate != snake.tail())
            }
        };
        bites.then_some(Collision::SelfBite)
    }
}
