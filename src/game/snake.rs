use super::direction::Direction;
use super::grid::Position;
use std::collections::VecDeque;

/// Snake state.
///
/// All positions are relative to the top-left corner of the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    head: Position,

    /// The positions of the rest of the snake, starting with the segment
    /// right behind the head and ending with the tail
    body: VecDeque<Position>,
}

impl Snake {
    /// Create a straight snake `length` segments long with its head at
    /// `head` and its body trailing off to the left, so that it faces east.
    /// A `length` of zero is treated as one.
    pub(crate) fn new(head: Position, length: usize) -> Snake {
        let body = std::iter::successors(Some(head), |&p| Some(Direction::West.advance(p)))
            .skip(1)
            .take(length.saturating_sub(1))
            .collect();
        Snake { head, body }
    }

    pub(crate) fn head(&self) -> Position {
        self.head
    }

    /// Return the position of the last segment.  For a one-segment snake,
    /// this is the head.
    pub(crate) fn tail(&self) -> Position {
        self.body.back().copied().unwrap_or(self.head)
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Iterate over all segments, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// The position the head would move to when heading in `direction`.
    /// Does not move the snake.
    pub(crate) fn proposed_head(&self, direction: Direction) -> Position {
        direction.advance(self.head)
    }

    /// Move the head to `new_head`.  Unless `grow` is `true`, the tail is
    /// dropped so that the length stays the same.
    pub(crate) fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(self.head);
        self.head = new_head;
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns `true` if any segment of the snake is at `pos`
    pub(crate) fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(snake: &Snake) -> Vec<Position> {
        snake.segments().collect()
    }

    #[test]
    fn new_snake() {
        let snake = Snake::new(Position::new(9, 10), 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(9, 10));
        assert_eq!(snake.tail(), Position::new(7, 10));
        assert_eq!(
            segments(&snake),
            [
                Position::new(9, 10),
                Position::new(8, 10),
                Position::new(7, 10)
            ]
        );
    }

    #[test]
    fn new_snake_length_one() {
        let snake = Snake::new(Position::new(4, 4), 1);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.tail(), Position::new(4, 4));
        assert_eq!(Snake::new(Position::new(4, 4), 0), snake);
    }

    #[test]
    fn proposed_head_does_not_move() {
        let snake = Snake::new(Position::new(9, 10), 3);
        assert_eq!(
            snake.proposed_head(Direction::North),
            Position::new(9, 9)
        );
        assert_eq!(snake.head(), Position::new(9, 10));
    }

    #[test]
    fn slide() {
        let mut snake = Snake::new(Position::new(9, 10), 3);
        snake.advance(Position::new(10, 10), false);
        assert_eq!(
            segments(&snake),
            [
                Position::new(10, 10),
                Position::new(9, 10),
                Position::new(8, 10)
            ]
        );
    }

    #[test]
    fn grow() {
        let mut snake = Snake::new(Position::new(9, 10), 3);
        snake.advance(Position::new(10, 10), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Position::new(7, 10));
        snake.advance(Position::new(10, 9), false);
        assert_eq!(
            segments(&snake),
            [
                Position::new(10, 9),
                Position::new(10, 10),
                Position::new(9, 10),
                Position::new(8, 10)
            ]
        );
    }

    #[test]
    fn occupies() {
        let snake = Snake::new(Position::new(9, 10), 3);
        assert!(snake.occupies(Position::new(9, 10)));
        assert!(snake.occupies(Position::new(8, 10)));
        assert!(snake.occupies(Position::new(7, 10)));
        assert!(!snake.occupies(Position::new(6, 10)));
        assert!(!snake.occupies(Position::new(10, 10)));
        assert!(!snake.occupies(Position::new(9, 9)));
    }
}
