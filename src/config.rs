//! Game configuration.

use crate::error::ConfigError;
use crate::wins::WinCarryPolicy;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a game session.
///
/// Every field has a default, so an empty TOML document (or
/// [`GameConfig::default`]) yields the classic two-player 3x3 game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimension (the board is `dimension` x `dimension`).
    #[serde(default = "default_dimension")]
    dimension: usize,

    /// Number of player slots in the turn order.
    #[serde(default = "default_player_count")]
    player_count: usize,

    /// Whether win counts survive an engine reset.
    #[serde(default)]
    win_carry: WinCarryPolicy,
}

fn default_dimension() -> usize {
    3
}

fn default_player_count() -> usize {
    2
}

impl GameConfig {
    /// Creates a configuration with the given dimension and player count
    /// and the default win-carry policy.
    pub fn new(dimension: usize, player_count: usize) -> Self {
        Self {
            dimension,
            player_count,
            win_carry: WinCarryPolicy::default(),
        }
    }

    /// Sets the win-carry policy.
    pub fn with_win_carry(mut self, policy: WinCarryPolicy) -> Self {
        self.win_carry = policy;
        self
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(
            dimension = config.dimension,
            player_count = config.player_count,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks the fail-fast construction rules: a board of at least 1x1
    /// and at least two player slots.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension == 0 {
            return Err(ConfigError::new("dimension must be at least 1"));
        }
        if self.player_count < 2 {
            return Err(ConfigError::new("at least 2 player slots are required"));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            player_count: default_player_count(),
            win_carry: WinCarryPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.dimension(), 3);
        assert_eq!(*config.player_count(), 2);
        assert_eq!(*config.win_carry(), WinCarryPolicy::Persist);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: GameConfig = toml::from_str(
            "dimension = 4\nwin_carry = \"clear_on_reset\"\n",
        )
        .unwrap();
        assert_eq!(*config.dimension(), 4);
        assert_eq!(*config.player_count(), 2);
        assert_eq!(*config.win_carry(), WinCarryPolicy::ClearOnReset);
    }

    #[test]
    fn test_validate_rejects_zero_dimension() {
        let config = GameConfig::new(0, 2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_single_player() {
        let config = GameConfig::new(3, 1);
        assert!(config.validate().is_err());
    }
}
