//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Environment variable overriding the puzzle location.
pub const PUZZLES_ENV: &str = "INTERSECTIONS_PUZZLES";

/// Runtime settings for a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Puzzle collection: a file path or an `http(s)://` URL.
    #[serde(default = "default_puzzles")]
    puzzles: String,

    /// How long incorrect markers stay up, in milliseconds.
    #[serde(default = "default_unflag_delay_ms")]
    unflag_delay_ms: u64,

    /// Seed for the card shuffle; random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_puzzles() -> String {
    "puzzles.json".to_string()
}

#[instrument]
fn default_unflag_delay_ms() -> u64 {
    1500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            puzzles: default_puzzles(),
            unflag_delay_ms: default_unflag_delay_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(puzzles = %config.puzzles, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file if it exists, otherwise starts from defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies the puzzle location from the environment, if set.
    #[instrument(skip(self))]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(puzzles) = std::env::var(PUZZLES_ENV) {
            debug!(%puzzles, "Puzzle location overridden by environment");
            self.puzzles = puzzles;
        }
        self
    }

    /// Overrides the puzzle location.
    pub fn with_puzzles(mut self, puzzles: impl Into<String>) -> Self {
        self.puzzles = puzzles.into();
        self
    }

    /// Overrides the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides how long incorrect markers stay up.
    pub fn with_unflag_delay_ms(mut self, unflag_delay_ms: u64) -> Self {
        self.unflag_delay_ms = unflag_delay_ms;
        self
    }

    /// Incorrect-marker lifetime.
    pub fn unflag_delay(&self) -> Duration {
        Duration::from_millis(self.unflag_delay_ms)
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

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml("").expect("empty config is valid");
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.unflag_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_partial_toml() {
        let config = GameConfig::from_toml("puzzles = \"https://example.com/p.json\"\nseed = 9\n")
            .expect("valid config");
        assert_eq!(config.puzzles(), "https://example.com/p.json");
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(*config.unflag_delay_ms(), 1500);
    }

    #[test]
    fn test_bad_toml_reports_error() {
        let err = GameConfig::from_toml("seed = \"nope\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = GameConfig::load_or_default("/nonexistent/intersections.toml")
            .expect("missing file is not an error");
        assert_eq!(config, GameConfig::default());
    }
}
