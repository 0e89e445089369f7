//! Configuration loading from TOML files

mod settings;

pub use settings::{default_config, DiceConfig, HistoryConfig, RollerConfig};

use crate::checks::CharacterSheet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate roller settings from a file
pub fn load_roller_config(path: &Path) -> Result<RollerConfig, ConfigError> {
    let config: RollerConfig = load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Load a character sheet from a file
pub fn load_character_sheet(path: &Path) -> Result<CharacterSheet, ConfigError> {
    let sheet: CharacterSheet = load_toml(path)?;
    if sheet.name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "character name must not be empty".to_string(),
        ));
    }
    Ok(sheet)
}
