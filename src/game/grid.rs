/// A cell coordinate on the playing field.
///
/// Coordinates are signed so that a candidate head one step past the edge of
/// the grid can still be represented and rejected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// Return the position `dx` columns and `dy` rows away from `self`
    pub(crate) fn offset(self, (dx, dy): (i32, i32)) -> Position {
        Position {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// The bounds of the playing field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    pub(crate) const fn new(width: u16, height: u16) -> Grid {
        Grid { width, height }
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    /// Returns `true` iff both coordinates of `pos` lie within the grid
    pub(crate) fn in_bounds(self, pos: Position) -> bool {
        (0..i32::from(self.width)).contains(&pos.x) && (0..i32::from(self.height)).contains(&pos.y)
    }

    /// The number of cells in the grid
    pub(crate) fn area(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Where a new snake's head is placed: the middle row, and the column
    /// just left of center on even-width grids.
    pub(crate) fn start_head(self) -> Position {
        Position::new(
            i32::from(self.width.saturating_sub(1) / 2),
            i32::from(self.height / 2),
        )
    }
}
