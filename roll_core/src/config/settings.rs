//! Roller settings

use super::ConfigError;
use crate::dice::DEFAULT_HISTORY_CAPACITY;
use crate::types::DieType;
use serde::{Deserialize, Serialize};

/// Tunable roller settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollerConfig {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub dice: DiceConfig,
}

impl RollerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.capacity == 0 {
            return Err(ConfigError::ValidationError(
                "history.capacity must be at least 1".to_string(),
            ));
        }
        if self.dice.default_count == 0 {
            return Err(ConfigError::ValidationError(
                "dice.default_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum outcomes kept per session
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiceConfig {
    /// Fixed seed for reproducible sessions; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_die")]
    pub default_die: DieType,
    #[serde(default = "default_count")]
    pub default_count: u32,
}

impl Default for DiceConfig {
    fn default() -> Self {
        DiceConfig {
            seed: None,
            default_die: DieType::D20,
            default_count: 1,
        }
    }
}

fn default_die() -> DieType {
    DieType::D20
}

fn default_count() -> u32 {
    1
}

/// Built-in settings, falling back to `RollerConfig::default()` if the
/// embedded file does not parse
pub fn default_config() -> RollerConfig {
    let toml = include_str!("../../config/roller.toml");
    super::parse_toml::<RollerConfig>(toml)
        .and_then(|config| config.validate().map(|_| config))
        .unwrap_or_else(|e| {
            tracing::warn!("Embedded roller config rejected, using defaults: {}", e);
            RollerConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RollerConfig::default();
        assert_eq!(config.history.capacity, 50);
        assert_eq!(config.dice.default_die, DieType::D20);
        assert!(config.dice.seed.is_none());
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        assert_eq!(default_config(), RollerConfig::default());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[history]
capacity = 20

[dice]
seed = 1234
default_die = "d6"
default_count = 2
"#;
        let config: RollerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.history.capacity, 20);
        assert_eq!(config.dice.seed, Some(1234));
        assert_eq!(config.dice.default_die, DieType::D6);
        assert_eq!(config.dice.default_count, 2);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RollerConfig = toml::from_str("[dice]\nseed = 5\n").unwrap();
        assert_eq!(config.history.capacity, 50);
        assert_eq!(config.dice.default_count, 1);
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let mut config = RollerConfig::default();
        config.history.capacity = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }
}
