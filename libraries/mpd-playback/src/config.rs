//! Session configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default elapsed time after which `previous` restarts the current track
pub const DEFAULT_RESTART_THRESHOLD_MS: u64 = 15_000;

/// Configuration for a playback session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// `previous` seeks to the start of the current track instead of
    /// changing track once this much of it has elapsed (default: 15000)
    #[serde(default = "default_restart_threshold_ms")]
    pub previous_restart_threshold_ms: u64,

    /// Seed for random-mode track selection (default: seeded from entropy)
    #[serde(default)]
    pub random_seed: Option<u64>,
}

fn default_restart_threshold_ms() -> u64 {
    DEFAULT_RESTART_THRESHOLD_MS
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            previous_restart_threshold_ms: DEFAULT_RESTART_THRESHOLD_MS,
            random_seed: None,
        }
    }
}

impl SessionConfig {
    /// Parse a config from TOML, filling unset fields with defaults
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }
}
