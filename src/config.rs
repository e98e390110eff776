//! Settings for the terminal driver, read from an optional YAML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Environment variable naming the config file when no flag is given.
pub const CONFIG_ENV: &str = "DUEL_CHESS_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Draw pieces with Unicode glyphs instead of letters.
    pub unicode: bool,
    pub show_legal_moves: bool,
    /// Draw rank 1 at the bottom.
    pub light_at_bottom: bool,
    pub log_level: Option<String>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            unicode: false,
            show_legal_moves: true,
            light_at_bottom: true,
            log_level: None,
        }
    }
}

impl PlayConfig {
    /// Defaults when `path` is `None` or does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) if p.exists() => Self::from_yaml(&fs::read_to_string(p)?),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }
}
