//! Ruleset configuration.
//!
//! Only the fixed rewards are configurable; everything else is derived from the dice.
//! Every field has a default, so an empty document yields the standard ruleset.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Fixed category rewards.
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Fixed rewards for the categories that do not sum dice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoringConfig {
    /// Reward for five of a kind.
    #[serde(default = "default_yatzy")]
    pub yatzy: u32,
    /// Reward for 1-2-3-4-5.
    #[serde(default = "default_small_straight")]
    pub small_straight: u32,
    /// Reward for 2-3-4-5-6.
    #[serde(default = "default_large_straight")]
    pub large_straight: u32,
}

fn default_yatzy() -> u32 {
    50
}

fn default_small_straight() -> u32 {
    15
}

fn default_large_straight() -> u32 {
    20
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            yatzy: default_yatzy(),
            small_straight: default_small_straight(),
            large_straight: default_large_straight(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
