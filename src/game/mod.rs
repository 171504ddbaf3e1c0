mod collision;
mod direction;
mod food;
mod grid;
mod pellet;
mod snake;
mod snapshot;
pub(crate) use self::collision::{Collision, CollisionPolicy};
pub(crate) use self::direction::Direction;
pub(crate) use self::food::current_food;
pub(crate) use self::grid::{Grid, Position};
pub(crate) use self::snapshot::{RenderSink, Snapshot};
use self::snake::Snake;
use crate::config::GameConfig;
use crate::highscores::HighScoreStore;
use crate::ticker::TickSource;
use rand::Rng;
use tracing::{debug, info};

/// The game controller.  It owns the authoritative game state; everything
/// else talks to it through the methods below, which silently do nothing when
/// called in a state where they don't apply.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R, T, S, H> {
    rng: R,
    ticker: T,
    sink: S,
    store: H,
    config: GameConfig,
    state: GameState,
    snake: Snake,
    pellet: Option<Position>,
    /// The direction applied during the most recent tick
    direction: Direction,
    /// The direction that the next tick will apply
    pending: Direction,
    score: u32,
    high_score: u32,
    collision: Option<Collision>,
}

impl<R: Rng, T: TickSource, S: RenderSink, H: HighScoreStore> Game<R, T, S, H> {
    /// Create a game in the `Idle` state, load the high score from `store`,
    /// and publish an initial snapshot to `sink`
    pub(crate) fn new(config: GameConfig, mut rng: R, ticker: T, sink: S, mut store: H) -> Self {
        let grid = config.grid();
        let snake = Snake::new(grid.start_head(), config.initial_length);
        let pellet = pellet::spawn(&snake, grid, &mut rng);
        let high_score = store.load_high_score();
        let mut game = Game {
            rng,
            ticker,
            sink,
            store,
            config,
            state: GameState::Idle,
            snake,
            pellet,
            direction: Direction::East,
            pending: Direction::East,
            score: 0,
            high_score,
            collision: None,
        };
        game.publish();
        game
    }

    pub(crate) fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Up => self.set_pending_direction(Direction::North),
            Intent::Down => self.set_pending_direction(Direction::South),
            Intent::Left => self.set_pending_direction(Direction::West),
            Intent::Right => self.set_pending_direction(Direction::East),
            Intent::TogglePause => self.toggle_pause(),
            Intent::NewGame => self.new_game(),
        }
    }

    /// Start a fresh game from any state
    pub(crate) fn new_game(&mut self) {
        let grid = self.config.grid();
        self.snake = Snake::new(grid.start_head(), self.config.initial_length);
        self.score = 0;
        self.pellet = pellet::spawn(&self.snake, grid, &mut self.rng);
        self.direction = Direction::East;
        self.pending = Direction::East;
        self.collision = None;
        self.state = GameState::Running;
        self.ticker.start(self.config.tick_period());
        info!(
            width = grid.width(),
            height = grid.height(),
            high_score = self.high_score,
            "Starting new game"
        );
        self.publish();
    }

    /// Advance the snake by one cell
    pub(crate) fn tick(&mut self) {
        if self.state != GameState::Running {
            return;
        }
        self.direction = self.pending;
        let candidate = self.snake.proposed_head(self.direction);
        let grow = self.pellet == Some(candidate);
        if let Some(collision) =
            self.config
                .collision
                .check(candidate, &self.snake, self.config.grid(), grow)
        {
            self.collision = Some(collision);
            self.game_over();
            return;
        }
        self.snake.advance(candidate, grow);
        if grow {
            self.eat();
            if self.pellet.is_none() {
                info!("The snake has filled the grid");
                self.game_over();
                return;
            }
        }
        self.publish();
    }

    /// Queue a turn for the next tick.  Only turns are accepted: a direction
    /// on the same axis as the one the snake last moved in is ignored.
    pub(crate) fn set_pending_direction(&mut self, direction: Direction) {
        if self.state != GameState::Running {
            return;
        }
        if direction.axis() == self.direction.axis() {
            debug!(?direction, current = ?self.direction, "Ignoring turn along current axis");
            return;
        }
        self.pending = direction;
    }

    pub(crate) fn toggle_pause(&mut self) {
        match self.state {
            GameState::Running => {
                self.state = GameState::Paused;
                self.ticker.stop();
                debug!("Paused");
            }
            GameState::Paused => {
                self.state = GameState::Running;
                self.ticker.start(self.config.tick_period());
                debug!("Resumed");
            }
            GameState::Idle | GameState::GameOver => return,
        }
        self.publish();
    }

    fn eat(&mut self) {
        let old_food = current_food(self.score);
        self.score = self.score.saturating_add(1);
        let food = current_food(self.score);
        if food != old_food {
            debug!(score = self.score, food = food.name, "Food level changed");
        }
        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.save_high_score(self.score);
        }
        self.pellet = pellet::spawn(&self.snake, self.config.grid(), &mut self.rng);
        debug!(pellet = ?self.pellet, "Placed pellet");
    }

    fn game_over(&mut self) {
        self.state = GameState::GameOver;
        self.ticker.stop();
        info!(
            score = self.score,
            high_score = self.high_score,
            head = ?self.snake.head(),
            collision = ?self.collision,
            "Game over"
        );
        self.publish();
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.sink.publish(snapshot);
    }
}

impl<R, T, S, H> Game<R, T, S, H> {
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.segments().collect(),
            pellet: self.pellet,
            score: self.score,
            high_score: self.high_score,
            food: current_food(self.score),
            direction: self.direction,
            state: self.state,
            collision: self.collision,
        }
    }

    pub(crate) fn state(&self) -> GameState {
        self.state
    }

    pub(crate) fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    pub(crate) fn ticker(&self) -> &T {
        &self.ticker
    }

    pub(crate) fn sink(&self) -> &S {
        &self.sink
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    /// No game has been started yet
    Idle,
    Running,
    Paused,
    /// The snake crashed or filled the grid.  Only a new game leaves this
    /// state.
    GameOver,
}

/// Player input, as understood by the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Intent {
    Up,
    Down,
    Left,
    Right,
    TogglePause,
    NewGame,
}
