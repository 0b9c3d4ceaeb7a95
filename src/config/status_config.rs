use crate::{
    config::{load_config, ConfigFileError},
    constants::{DEFAULT_STALE_TOLERANCE, STALE_TOLERANCE_ENV},
};
use log::{debug, warn};
use std::{env, path::Path};

/// Runtime configuration injected into the status engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusConfig {
    /// Confirmation depth in blocks.
    pub stale_tolerance: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            stale_tolerance: DEFAULT_STALE_TOLERANCE,
        }
    }
}

impl StatusConfig {
    pub fn new(stale_tolerance: u64) -> Self {
        Self { stale_tolerance }
    }

    /// Reads `STALE_TOLERANCE`, keeping the default when unset or not a positive integer.
    pub fn from_env() -> Self {
        let stale_tolerance = match env::var(STALE_TOLERANCE_ENV) {
            Ok(value) => match value.parse::<u64>() {
                Ok(parsed) if parsed > 0 => parsed,
                _ => {
                    warn!(
                        "Ignoring invalid {}={:?}, using default {}",
                        STALE_TOLERANCE_ENV, value, DEFAULT_STALE_TOLERANCE
                    );
                    DEFAULT_STALE_TOLERANCE
                }
            },
            Err(_) => DEFAULT_STALE_TOLERANCE,
        };
        debug!("Status config loaded from env: stale_tolerance={}", stale_tolerance);
        Self { stale_tolerance }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let file_config = load_config(path)?;
        let stale_tolerance = file_config.resolved_stale_tolerance();
        debug!(
            "Status config loaded for {:?}: stale_tolerance={}",
            file_config.network, stale_tolerance
        );
        Ok(Self { stale_tolerance })
    }
}
