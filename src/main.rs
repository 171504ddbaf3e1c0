mod app;
mod args;
mod command;
mod config;
mod consts;
mod game;
mod highscores;
mod logging;
mod ticker;
mod util;
mod view;
use crate::app::App;
use crate::args::Arguments;
use crate::config::Config;
use crate::game::Game;
use crate::highscores::HighScoreFile;
use crate::ticker::Ticker;
use crate::view::View;
use anyhow::Context;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, warn};

fn main() -> ExitCode {
    match Arguments::from_env() {
        Ok(Arguments::Run { config }) => exit(run(config)),
        Ok(Arguments::Help) => {
            print!("{}", args::USAGE);
            ExitCode::SUCCESS
        }
        Ok(Arguments::Version) => {
            println!("{}", args::VERSION);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprint!("{}", args::USAGE);
            ExitCode::from(2)
        }
    }
}

fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    logging::init(&config.logging)?;
    let high_score_path = config.high_score_path();
    debug!(path = ?high_score_path, "High score file");
    let game = Game::new(
        config.game,
        rand::rng(),
        Ticker::new(),
        View::new(config.game.grid(), config.display.cell_width),
        HighScoreFile::new(high_score_path),
    );
    info!("Starting up");
    execute!(io::stdout(), EnableFocusChange)?;
    let terminal = ratatui::init();
    let r = App::new(game).run(terminal);
    ratatui::restore();
    disable_focus_change(&mut io::stdout());
    r?;
    Ok(())
}

/// Load the configuration file named on the command line, or else the default
/// configuration file if there is one
fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load(&path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()));
    }
    match Config::default_path() {
        Ok(path) => Config::load(&path, true)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        Err(_) => Ok(Config::default()),
    }
}

/// Turn focus-change reporting back off.  The game is already over by this
/// point, so a failure is only logged.
fn disable_focus_change<W: Write>(out: &mut W) {
    if let Err(e) = execute!(out, DisableFocusChange) {
        warn!("Failed to disable focus change reporting: {e}");
    }
}

fn exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e:#}");
            ExitCode::from(2)
        }
    }
}
