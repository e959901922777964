//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictacgo_core::{Difficulty, GameMode};
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Human-vs-human or human-vs-computer.
    #[serde(default)]
    mode: GameMode,

    /// Computer strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// Pause before the computer's move is shown, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_computer_delay_ms() -> u64 {
    600
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tictacgo.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            computer_delay_ms: default_computer_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        difficulty: Option<Difficulty>,
        computer_delay_ms: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(delay) = computer_delay_ms {
            self.computer_delay_ms = delay;
        }
        self
    }

    /// Computer pacing delay.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_classic_pacing() {
        let config = GameConfig::default();
        assert_eq!(*config.mode(), GameMode::HumanVsComputer);
        assert_eq!(*config.difficulty(), Difficulty::Medium);
        assert_eq!(config.computer_delay(), Duration::from_millis(600));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "difficulty = \"hard\"\nmode = \"human\"").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.difficulty(), Difficulty::Hard);
        assert_eq!(*config.mode(), GameMode::HumanVsHuman);
        assert_eq!(*config.computer_delay_ms(), 600);
        assert_eq!(config.log_file(), &PathBuf::from("tictacgo.log"));
    }

    #[test]
    fn test_bad_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "difficulty = \"impossible\"").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = GameConfig::load_or_default(path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mode = Some(GameMode::HumanVsHuman);
        let config = GameConfig::default().with_overrides(mode, None, Some(0));
        assert_eq!(*config.mode(), GameMode::HumanVsHuman);
        assert_eq!(*config.difficulty(), Difficulty::Medium);
        assert_eq!(config.computer_delay(), Duration::ZERO);
    }
}
