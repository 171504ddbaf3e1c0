use crate::consts;
use crate::game::{CollisionPolicy, Grid};
use crate::highscores::HighScoreFile;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Gameplay rules
    pub(crate) game: GameConfig,

    /// Settings about how the game is drawn
    pub(crate) display: DisplayConfig,

    /// Settings about data files
    pub(crate) files: FileConfig,

    /// Settings about the log file
    pub(crate) logging: LoggingConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if a setting is out of range.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        Config::parse(&content)
    }

    fn parse(content: &str) -> Result<Config, ConfigError> {
        let config = toml::from_str::<Config>(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let GameConfig {
            grid_width,
            grid_height,
            initial_length,
            tick_ms,
            ..
        } = self.game;
        let grid_sizes = consts::MIN_GRID_SIZE..=consts::MAX_GRID_SIZE;
        if !grid_sizes.contains(&grid_width) {
            return Err(ConfigError::invalid("game.grid-width", "must be between 4 and 200"));
        }
        if !grid_sizes.contains(&grid_height) {
            return Err(ConfigError::invalid("game.grid-height", "must be between 4 and 200"));
        }
        if !(1..=self.game.max_initial_length()).contains(&initial_length) {
            return Err(ConfigError::invalid(
                "game.initial-length",
                "must be at least 1 and fit in the left half of the grid",
            ));
        }
        if tick_ms == 0 {
            return Err(ConfigError::invalid("game.tick-ms", "must be positive"));
        }
        if !(1..=consts::MAX_CELL_WIDTH).contains(&self.display.cell_width) {
            return Err(ConfigError::invalid("display.cell-width", "must be between 1 and 4"));
        }
        Ok(())
    }

    /// Return the file in which the high score should be kept: the file
    /// given in the configuration or, if that is not set, the default high
    /// score file path.  Returns `None` if `files.save-high-score` is
    /// `false` or if no path could be determined.
    pub(crate) fn high_score_path(&self) -> Option<PathBuf> {
        if !self.files.save_high_score {
            return None;
        }
        self.files
            .high_score_file
            .clone()
            .or_else(HighScoreFile::default_path)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    pub(crate) grid_width: u16,
    pub(crate) grid_height: u16,
    /// Number of segments a new snake starts with
    pub(crate) initial_length: usize,
    /// Milliseconds between moves
    pub(crate) tick_ms: u64,
    pub(crate) collision: CollisionPolicy,
}

impl GameConfig {
    pub(crate) fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// The longest snake that fits between the starting head position and
    /// the left wall
    fn max_initial_length(&self) -> usize {
        usize::from(self.grid_width.saturating_add(1) / 2)
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            grid_width: consts::DEFAULT_GRID_SIZE,
            grid_height: consts::DEFAULT_GRID_SIZE,
            initial_length: consts::DEFAULT_INITIAL_LENGTH,
            tick_ms: consts::DEFAULT_TICK_MS,
            collision: CollisionPolicy::default(),
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct DisplayConfig {
    /// Terminal columns per grid cell
    pub(crate) cell_width: u16,
}

impl Default for DisplayConfig {
    fn default() -> DisplayConfig {
        DisplayConfig {
            cell_width: consts::DEFAULT_CELL_WIDTH,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score in a file
    save_high_score: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LoggingConfig {
    /// File to which to append log messages.  Nothing is logged if this is
    /// not set, as the terminal itself is taken up by the game.
    pub(crate) file: Option<PathBuf>,

    /// A `tracing` filter directive, e.g. `"info"` or `"gridsnake=debug"`
    pub(crate) level: String,
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            file: None,
            level: String::from("info"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {key}: {reason}")]
    Invalid {
        key: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, reason: &'static str) -> ConfigError {
        ConfigError::Invalid { key, reason }
    }
}
