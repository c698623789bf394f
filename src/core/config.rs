//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a game of Liar's Dice.
///
/// Validated when the engine is set up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Dice each player starts with. Must be positive.
    pub dice_per_player: u32,

    /// How many of the most recent history entries a decision provider sees.
    pub history_window: usize,

    /// Upper bound on a single provider call. `None` calls the provider
    /// inline with no bound.
    pub decision_timeout: Option<Duration>,

    /// Seed for dice and fallback decisions. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dice_per_player: 5,
            history_window: 10,
            decision_timeout: Some(Duration::from_secs(30)),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dice per player.
    pub fn with_dice_per_player(mut self, dice: u32) -> Self {
        self.dice_per_player = dice;
        self
    }

    /// Set the history window shown to providers.
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    /// Set the provider timeout (`None` disables it).
    pub fn with_decision_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.decision_timeout = timeout;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.dice_per_player, 5);
        assert_eq!(config.history_window, 10);
        assert_eq!(config.decision_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::new()
            .with_dice_per_player(2)
            .with_history_window(4)
            .with_decision_timeout(None)
            .with_seed(99);

        assert_eq!(config.dice_per_player, 2);
        assert_eq!(config.history_window, 4);
        assert_eq!(config.decision_timeout, None);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"dice_per_player": 3}"#).unwrap();
        assert_eq!(config.dice_per_player, 3);
        assert_eq!(config.history_window, 10);
    }
}
