use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Where the game keeps its all-time high score.
///
/// Persistence is best-effort: implementations report `0` when nothing can be
/// loaded, and a failed save never interrupts the game.
pub(crate) trait HighScoreStore {
    fn load_high_score(&mut self) -> u32;
    fn save_high_score(&mut self, score: u32);
}

/// A [`HighScoreStore`] backed by a small JSON file.  If no path is set, the
/// high score is not persisted at all.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct HighScoreFile {
    path: Option<PathBuf>,
}

impl HighScoreFile {
    pub(crate) fn new(path: Option<PathBuf>) -> HighScoreFile {
        HighScoreFile { path }
    }

    /// Return the default high score file path
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("gridsnake").join("highscore.json"))
    }

    /// Read the high score from disk.  A missing file counts as a high score
    /// of zero.
    pub(crate) fn load(&self) -> Result<u32, LoadError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(0);
        };
        let src = match fs_err::read(path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        serde_json::from_slice::<HighScoreRecord>(&src)
            .map(|rec| rec.high_score)
            .map_err(LoadError::deserialize)
    }

    pub(crate) fn save(&self, score: u32) -> Result<(), SaveError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(&HighScoreRecord { high_score: score })
            .map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

impl HighScoreStore for HighScoreFile {
    fn load_high_score(&mut self) -> u32 {
        match self.load() {
            Ok(score) => {
                debug!(score, "Loaded high score");
                score
            }
            Err(e) => {
                warn!("{:#}", anyhow::Error::new(e));
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u32) {
        if let Err(e) = self.save(score) {
            warn!("{:#}", anyhow::Error::new(e));
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
struct HighScoreRecord {
    high_score: u32,
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write high score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high score")]
    Deserialize(#[source] serde_json::Error),
}

/// An in-memory [`HighScoreStore`] that remembers every save
#[cfg(test)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct MemoryStore {
    pub(crate) stored: u32,
    pub(crate) saves: Vec<u32>,
}

#[cfg(test)]
impl HighScoreStore for MemoryStore {
    fn load_high_score(&mut self) -> u32 {
        self.stored
    }

    fn save_high_score(&mut self, score: u32) {
        self.stored = score;
        self.saves.push(score);
    }
}
