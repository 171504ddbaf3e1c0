use super::collision::Collision;
use super::direction::Direction;
use super::food::FoodLevel;
use super::grid::Position;
use super::GameState;

/// A read-only copy of everything needed to draw the game, handed to the
/// [`RenderSink`] whenever the game changes
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    /// The snake's segments, head first
    pub(crate) snake: Vec<Position>,

    /// `None` only when the snake has filled the whole grid
    pub(crate) pellet: Option<Position>,

    pub(crate) score: u32,
    pub(crate) high_score: u32,
    pub(crate) food: &'static FoodLevel,

    /// The direction the snake last moved in
    pub(crate) direction: Direction,

    pub(crate) state: GameState,

    /// Set once the game is over due to a crash
    pub(crate) collision: Option<Collision>,
}

/// Receiver for [`Snapshot`]s
pub(crate) trait RenderSink {
    fn publish(&mut self, snapshot: Snapshot);
}
