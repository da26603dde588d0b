//! Session settings loaded from the environment.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::{ConfigError, GridConfig};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub grid: GridConfig,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u32>,
    /// File that receives tracing output; `None` disables logging
    pub log_path: Option<PathBuf>,
}

impl SessionConfig {
    /// Create from environment variables.
    ///
    /// Grid settings come from [`GridConfig::from_env`]; on top of those:
    /// - `TUI2048_SEED`: u32 seed for a reproducible game
    /// - `TUI2048_LOG_PATH`: log file path
    pub fn from_env() -> Result<Self, ConfigError> {
        let grid = GridConfig::from_env()?;

        let seed = match env::var("TUI2048_SEED").map(|s| s.trim().to_string()) {
            Ok(s) if !s.is_empty() => Some(s.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "TUI2048_SEED",
                value: s.clone(),
            })?),
            _ => None,
        };

        let log_path = env::var("TUI2048_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Ok(Self {
            grid,
            seed,
            log_path,
        })
    }

    /// The configured seed, or one derived from the current time.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    // Fold the 128-bit timestamp so both fast- and slow-moving bits matter.
    (nanos as u32) ^ ((nanos >> 32) as u32) ^ ((nanos >> 64) as u32)
}
