mod paused;
use self::paused::Paused;
use crate::consts;
use crate::game::{Collision, Direction, GameState, Grid, Position, RenderSink, Snapshot};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};

/// Terminal renderer for the game.  It keeps the most recently published
/// [`Snapshot`] and draws it on request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct View {
    snapshot: Option<Snapshot>,
    grid: Grid,
    cell_width: u16,
}

impl View {
    pub(crate) fn new(grid: Grid, cell_width: u16) -> View {
        View {
            snapshot: None,
            grid,
            cell_width: cell_width.max(1),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Size of the bordered board, in terminal cells
    fn board_size(&self) -> Size {
        Size::new(
            self.grid
                .width()
                .saturating_mul(self.cell_width)
                .saturating_add(2),
            self.grid.height().saturating_add(2),
        )
    }
}

impl RenderSink for View {
    fn publish(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
    }
}

impl Widget for &View {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(snap) = self.snapshot.as_ref() else {
            return;
        };
        let board = self.board_size();
        let display = center_rect(
            area,
            Size::new(
                board.width.max(consts::MIN_DISPLAY_WIDTH),
                board.height.saturating_add(2),
            ),
        );
        let [score_area, board_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);

        buf.set_style(score_area, consts::SCORE_BAR_STYLE);
        Line::raw(format!(
            " Score: {}    High Score: {}    Food: {} {}",
            snap.score, snap.high_score, snap.food.name, snap.food.symbol
        ))
        .render(score_area, buf);

        let block_area = center_rect(board_area, board);
        let block = Block::bordered();
        let mut canvas = Canvas {
            area: block.inner(block_area),
            cell_width: self.cell_width,
            buf,
        };
        if let Some(pos) = snap.pellet {
            canvas.draw_cell(pos, snap.food.symbol, consts::FOOD_STYLE);
        }
        if let Some((&head, body)) = snap.snake.split_first() {
            for &pos in body {
                canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
            }
            if snap.collision.is_some() {
                canvas.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            } else {
                canvas.draw_cell(head, head_symbol(snap.direction), consts::SNAKE_STYLE);
            }
        }
        block.render(block_area, buf);

        status_line(snap).render(status_area, buf);
        if snap.state == GameState::Paused {
            let popup = center_rect(block_area, Size::new(Paused::WIDTH, Paused::HEIGHT));
            Paused.render(popup, buf);
        }
    }
}

fn head_symbol(direction: Direction) -> char {
    match direction {
        Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
        Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
        Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
        Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
    }
}

const RUNNING_KEYS: &[(&str, &str)] = &[("Pause", "p"), ("New Game", "n"), ("Quit", "q")];

const STOPPED_KEYS: &[(&str, &str)] = &[("New Game", "n"), ("Quit", "q")];

/// The pause pop-up lists its own keys
const PAUSED_KEYS: &[(&str, &str)] = &[];

fn status_line(snap: &Snapshot) -> Line<'static> {
    let (message, keys) = match snap.state {
        GameState::Idle => (
            String::from("Steer with the arrow keys, WASD, or HJKL."),
            STOPPED_KEYS,
        ),
        GameState::Running => (String::new(), RUNNING_KEYS),
        GameState::Paused => (String::new(), PAUSED_KEYS),
        GameState::GameOver => {
            let why = match snap.collision {
                Some(Collision::Wall) => "Oh dear, you ran into a wall!",
                Some(Collision::SelfBite) => "Oh dear, you bit yourself!",
                None => "You filled the whole grid!",
            };
            (format!("{why}  Final score: {}", snap.score), STOPPED_KEYS)
        }
    };
    let mut spans = vec![Span::raw(" ")];
    if !message.is_empty() {
        spans.push(Span::raw(message));
        spans.push(Span::raw("    "));
    }
    for (i, &(label, key)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" · "));
        }
        spans.push(Span::raw(label));
        spans.push(Span::raw(" ("));
        spans.push(Span::styled(key, consts::KEY_STYLE));
        spans.push(Span::raw(")"));
    }
    Line::from(spans)
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    cell_width: u16,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` in the first column of the grid cell at `pos` and blank
    /// out the rest of the cell.  Positions outside the area are skipped.
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some((x, y)) = self.locate(pos) else {
            return;
        };
        for i in 0..self.cell_width {
            let Some(cx) = x.checked_add(i) else {
                return;
            };
            if let Some(cell) = self.buf.cell_mut((cx, y)) {
                if i == 0 {
                    cell.set_char(symbol);
                    cell.set_style(style);
                } else {
                    cell.set_char(' ');
                }
            }
        }
    }

    fn locate(&self, pos: Position) -> Option<(u16, u16)> {
        let col = u16::try_from(pos.x).ok()?;
        let row = u16::try_from(pos.y).ok()?;
        let x = self
            .area
            .x
            .checked_add(col.checked_mul(self.cell_width)?)?;
        let y = self.area.y.checked_add(row)?;
        (x < self.area.right() && y < self.area.bottom()).then_some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::current_food;
    use ratatui::buffer::Cell;
    use pretty_assertions::assert_eq;

    fn snapshot(state: GameState) -> Snapshot {
        Snapshot {
            snake: vec![
                Position::new(9, 10),
                Position::new(8, 10),
                Position::new(7, 10),
            ],
            pellet: Some(Position::new(3, 4)),
            score: 0,
            high_score: 12,
            food: current_food(0),
            direction: Direction::East,
            state,
            collision: None,
        }
    }

    fn render(snapshot: Snapshot) -> Buffer {
        let mut view = View::new(Grid::new(20, 20), 2);
        view.publish(snapshot);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        view.render(area, &mut buffer);
        buffer
    }

    /// Compare against a blank cell given `style`, since a cell's own style
    /// also carries its reset colors
    fn has_style(buf: &Buffer, pos: (u16, u16), style: Style) -> bool {
        let mut cell = Cell::default();
        cell.set_style(style);
        buf[pos].style() == cell.style()
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn nothing_published() {
        let view = View::new(Grid::new(20, 20), 2);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        view.render(area, &mut buffer);
        assert_eq!(buffer, Buffer::empty(area));
    }

    #[test]
    fn idle_board() {
        let buf = render(snapshot(GameState::Idle));
        assert_eq!(
            row(&buf, 0).trim_end(),
            " Score: 0    High Score: 12    Food: Worm ≈"
        );
        assert!(has_style(&buf, (0, 0), consts::SCORE_BAR_STYLE));
        assert_eq!(buf[(19, 1)].symbol(), "┌");
        assert_eq!(buf[(60, 1)].symbol(), "┐");
        assert_eq!(buf[(19, 22)].symbol(), "└");
        assert_eq!(buf[(60, 22)].symbol(), "┘");
        assert_eq!(buf[(38, 12)].symbol(), "<");
        assert!(has_style(&buf, (38, 12), consts::SNAKE_STYLE));
        assert_eq!(buf[(36, 12)].symbol(), "⚬");
        assert_eq!(buf[(34, 12)].symbol(), "⚬");
        assert_eq!(buf[(26, 6)].symbol(), "≈");
        assert!(has_style(&buf, (26, 6), consts::FOOD_STYLE));
        assert_eq!(
            row(&buf, 23).trim_end(),
            " Steer with the arrow keys, WASD, or HJKL.    New Game (n) · Quit (q)"
        );
    }

    #[test]
    fn head_points_where_the_snake_is_going() {
        let mut snap = snapshot(GameState::Running);
        snap.direction = Direction::North;
        let buf = render(snap);
        assert_eq!(buf[(38, 12)].symbol(), "v");
        assert_eq!(
            row(&buf, 23).trim_end(),
            " Pause (p) · New Game (n) · Quit (q)"
        );
        assert!(has_style(&buf, (8, 23), consts::KEY_STYLE));
    }

    #[test]
    fn wall_collision() {
        let mut snap = snapshot(GameState::GameOver);
        snap.snake = vec![
            Position::new(19, 10),
            Position::new(18, 10),
            Position::new(17, 10),
        ];
        snap.score = 4;
        snap.food = current_food(4);
        snap.collision = Some(Collision::Wall);
        let buf = render(snap);
        assert_eq!(buf[(58, 12)].symbol(), "×");
        assert!(has_style(&buf, (58, 12), consts::COLLISION_STYLE));
        assert_eq!(
            row(&buf, 0).trim_end(),
            " Score: 4    High Score: 12    Food: Cricket ж"
        );
        assert_eq!(
            row(&buf, 23).trim_end(),
            " Oh dear, you ran into a wall!  Final score: 4    New Game (n) · Quit (q)"
        );
    }

    #[test]
    fn self_bite() {
        let mut snap = snapshot(GameState::GameOver);
        snap.collision = Some(Collision::SelfBite);
        let buf = render(snap);
        assert_eq!(buf[(38, 12)].symbol(), "×");
        assert!(row(&buf, 23).starts_with(" Oh dear, you bit yourself!  Final score: 0"));
    }

    #[test]
    fn grid_filled() {
        let mut snap = snapshot(GameState::GameOver);
        snap.pellet = None;
        let buf = render(snap);
        assert_eq!(buf[(38, 12)].symbol(), "<");
        assert_eq!(buf[(26, 6)].symbol(), " ");
        assert!(row(&buf, 23).starts_with(" You filled the whole grid!"));
    }

    #[test]
    fn paused_popup() {
        let buf = render(snapshot(GameState::Paused));
        let rows = (0..24).map(|y| row(&buf, y)).collect::<Vec<_>>();
        let top = rows
            .iter()
            .position(|r| r.contains("┌──── PAUSED ─────┐"))
            .expect("popup should be drawn");
        assert!(rows[top + 1].contains("│ Resume (p)      │"));
        assert!(rows[top + 2].contains("│ New Game (n)    │"));
        assert!(rows[top + 3].contains("│ Quit (q)        │"));
        assert!(rows[top + 4].contains("└─────────────────┘"));
        assert_eq!(rows[23].trim(), "");
    }

    #[test]
    fn wide_cells_are_blanked() {
        let mut view = View::new(Grid::new(4, 4), 3);
        let mut snap = snapshot(GameState::Running);
        snap.snake = vec![Position::new(1, 0), Position::new(0, 0)];
        snap.pellet = Some(Position::new(3, 3));
        view.publish(snap);
        let area = Rect::new(0, 0, 80, 8);
        let mut buffer = Buffer::empty(area);
        view.render(area, &mut buffer);
        // 4 cells * 3 columns + 2 = 14 wide, centered in 80 columns
        assert_eq!(buffer[(33, 1)].symbol(), "┌");
        assert_eq!(
            row(&buffer, 2).chars().skip(33).collect::<String>().trim_end(),
            "│⚬  <        │"
        );
        assert_eq!(buffer[(43, 5)].symbol(), "≈");
    }
}
