use std::path::Path;
use std::time::Duration;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION};

/// Largest board dimension the terminal front end will lay out
pub const MAX_DIMENSION: usize = 20;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
    pub effects: EffectsConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_ROWS,
            width: DEFAULT_COLS,
        }
    }
}

/// Initial colors offered by the setup form
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first: String,
    pub second: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first: "red".to_string(),
            second: "yellow".to_string(),
        }
    }
}

/// Delays before end-of-game feedback is shown
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub highlight_delay_ms: u64,
    pub announce_delay_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        EffectsConfig {
            highlight_delay_ms: 550,
            announce_delay_ms: 600,
        }
    }
}

impl EffectsConfig {
    pub fn highlight_delay(&self) -> Duration {
        Duration::from_millis(self.highlight_delay_ms)
    }

    pub fn announce_delay(&self) -> Duration {
        Duration::from_millis(self.announce_delay_ms)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("height", self.board.height), ("width", self.board.width)] {
            if value < MIN_DIMENSION {
                return Err(ConfigError::Validation(format!(
                    "board.{name} must be >= {MIN_DIMENSION}"
                )));
            }
            if value > MAX_DIMENSION {
                return Err(ConfigError::Validation(format!(
                    "board.{name} must be <= {MAX_DIMENSION}"
                )));
            }
        }

        let first = self.players.first.trim();
        let second = self.players.second.trim();
        if first.is_empty() || second.is_empty() {
            return Err(ConfigError::Validation(
                "players.first and players.second must not be empty".into(),
            ));
        }
        if first.eq_ignore_ascii_case(second) {
            return Err(ConfigError::Validation(
                "players.first and players.second must differ".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
