use crate::command::Command;
use crate::game::{Game, GameState};
use crate::highscores::{HighScoreFile, HighScoreStore};
use crate::ticker::Ticker;
use crate::view::View;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;
use tracing::debug;

/// The terminal front end: draws the game, waits for input or the next tick,
/// and feeds both to the game
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng, H = HighScoreFile> {
    game: Game<R, Ticker, View, H>,
    quitting: bool,
}

impl<R: Rng, H: HighScoreStore> App<R, H> {
    pub(crate) fn new(game: Game<R, Ticker, View, H>) -> Self {
        App {
            game,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        debug!("Quitting");
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| self.game.sink().draw(frame))?;
        Ok(())
    }

    /// Block until either an input event arrives or the next tick is due,
    /// and handle whichever happened
    fn process_input(&mut self) -> io::Result<()> {
        if let Some(wait) = self.game.ticker().remaining(Instant::now()) {
            if wait.is_zero() || !poll(wait)? {
                self.tick_if_due(Instant::now());
                return Ok(());
            }
        }
        self.handle_event(read()?);
        Ok(())
    }

    /// Advance the game once if its ticker is due as of `now`
    fn tick_if_due(&mut self, now: Instant) {
        if self.game.ticker_mut().fire(now) {
            self.game.tick();
        }
    }

    fn handle_event(&mut self, event: Event) {
        if event == Event::FocusLost {
            if self.game.state() == GameState::Running {
                debug!("Lost focus; pausing");
                self.game.toggle_pause();
            }
            return;
        }
        let Some(ev) = event.as_key_press_event() else {
            return;
        };
        match Command::from_key_event(ev) {
            Some(Command::Quit | Command::Q) => self.quitting = true,
            Some(cmd) => {
                if let Some(intent) = cmd.intent() {
                    self.game.handle(intent);
                }
            }
            None => (),
        }
    }
}
