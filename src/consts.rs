//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};

/// Default width & height of the playing field, in cells
pub(crate) const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest width or height accepted for the playing field
pub(crate) const MIN_GRID_SIZE: u16 = 4;

/// Largest width or height accepted for the playing field
pub(crate) const MAX_GRID_SIZE: u16 = 200;

/// Length of the snake at the start of a game
pub(crate) const DEFAULT_INITIAL_LENGTH: usize = 3;

/// Default time between movements of the snake, in milliseconds
pub(crate) const DEFAULT_TICK_MS: u64 = 150;

/// Number of terminal columns used to draw one grid cell, so that the grid
/// looks roughly square
pub(crate) const DEFAULT_CELL_WIDTH: u16 = 2;

pub(crate) const MAX_CELL_WIDTH: u16 = 4;

/// Draw everything inside a rectangle at least this wide in the center of
/// the terminal window.
pub(crate) const MIN_DISPLAY_WIDTH: u16 = 80;

/// Environment variable holding a `tracing` filter directive that overrides
/// the configured log level
pub(crate) const LOG_ENV_VAR: &str = "GRIDSNAKE_LOG";

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the pellet
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
