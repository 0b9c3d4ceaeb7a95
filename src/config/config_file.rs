//! File based configuration for the status engine.
//!
//! ```json
//! { "network": "mainnet", "stale_tolerance": 10 }
//! ```
//!
//! `stale_tolerance` is optional and falls back to the network's standard
//! confirmation depth.

use crate::constants::{MAINNET_STALE_TOLERANCE, TESTNET_STALE_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFileNetworkType {
    #[default]
    Mainnet,
    Testnet,
}

impl ConfigFileNetworkType {
    pub const fn default_stale_tolerance(self) -> u64 {
        match self {
            ConfigFileNetworkType::Mainnet => MAINNET_STALE_TOLERANCE,
            ConfigFileNetworkType::Testnet => TESTNET_STALE_TOLERANCE,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StatusFileConfig {
    #[serde(default)]
    pub network: ConfigFileNetworkType,
    pub stale_tolerance: Option<u64>,
}

impl StatusFileConfig {
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        if self.stale_tolerance == Some(0) {
            return Err(ConfigFileError::InvalidFormat(
                "stale_tolerance must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Configured tolerance, or the network default when not set.
    pub fn resolved_stale_tolerance(&self) -> u64 {
        self.stale_tolerance
            .unwrap_or_else(|| self.network.default_stale_tolerance())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<StatusFileConfig, ConfigFileError> {
    let config_str = fs::read_to_string(path)?;
    let config: StatusFileConfig = serde_json::from_str(&config_str)?;
    config.validate()?;
    Ok(config)
}
