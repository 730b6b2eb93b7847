use serde::{Deserialize, Serialize};

use std::path::Path;

use crate::error::ConfigError;
use crate::search::Algorithm;

/// Deepest search the engine accepts. Plain minimax is exhaustive, so every
/// extra ply multiplies the work by up to seven
pub const MAX_DEPTH: usize = 8;

/// Which side moves first in a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Random,
    Player,
    Ai,
}

/// Search settings for the automated player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub algorithm: Algorithm,
    /// Number of plies to look ahead
    pub depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            algorithm: Algorithm::Minimax,
            depth: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: FirstPlayer,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_player: FirstPlayer::Random,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub game: GameConfig,
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
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.depth == 0 {
            return Err(ConfigError::Validation("engine.depth must be >= 1".into()));
        }
        if self.engine.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "engine.depth must be <= {}",
                MAX_DEPTH
            )));
        }
        Ok(())
    }

    /// Render the configuration as TOML, in the format [`AppConfig::load`] reads.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Validation(format!("config does not serialize: {}", e)))
    }
}
