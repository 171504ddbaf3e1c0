use super::grid::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

/// The axis along which a [`Direction`] moves
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    /// The unit `(dx, dy)` vector for one step in this direction.  Rows grow
    /// downwards, so north is `-y`.
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub(crate) fn axis(self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Vertical,
            Direction::East | Direction::West => Axis::Horizontal,
        }
    }

    /// Return the cell one step from `pos` in this direction.  The result may
    /// lie outside the grid.
    pub(crate) fn advance(self, pos: Position) -> Position {
        pos.offset(self.delta())
    }
}
