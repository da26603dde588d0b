//! Grid configuration and its validation.

use std::env;

use thiserror::Error;

use crate::types::{
    RenderMode, DEFAULT_GRID_SIZE, DEFAULT_INIT_BLOCKS, DEFAULT_RENDER_MODE, DEFAULT_SPAWN_COUNTS,
    MAX_GRID_SIZE,
};

/// Errors raised while building a grid configuration or a grid from values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    ZeroSize,

    #[error("grid size {size} exceeds the maximum of {max}")]
    TooLarge { size: usize, max: usize },

    #[error("spawn count distribution must not be empty")]
    EmptySpawnCounts,

    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("expected {expected} cells for the grid, got {actual}")]
    CellCount { expected: usize, actual: usize },

    #[error("cell {index} holds {value}, which is neither empty nor a power of two >= 2")]
    InvalidTile { index: usize, value: u32 },
}

/// Construction-time settings for a [`crate::Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Side length n; the grid holds n² cells
    pub size: usize,
    /// Tiles placed when the grid is created
    pub init_blocks: usize,
    /// Candidate spawn counts, one picked uniformly per turn
    pub spawn_counts: Vec<usize>,
    pub render_mode: RenderMode,
}

impl GridConfig {
    pub fn new(
        size: usize,
        init_blocks: usize,
        spawn_counts: Vec<usize>,
        render_mode: RenderMode,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            size,
            init_blocks,
            spawn_counts,
            render_mode,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants `new` enforces (fields are public, so re-check before use).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.size > MAX_GRID_SIZE {
            return Err(ConfigError::TooLarge {
                size: self.size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.spawn_counts.is_empty() {
            return Err(ConfigError::EmptySpawnCounts);
        }
        Ok(())
    }

    /// Total number of cells (n²)
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    pub fn with_render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }

    /// Create from environment variables.
    ///
    /// - `TUI2048_SIZE`: side length
    /// - `TUI2048_INIT_BLOCKS`: tiles on a fresh grid
    /// - `TUI2048_SPAWN_COUNTS`: comma-separated spawn-count distribution, e.g. `1,1,1,2`
    /// - `TUI2048_RENDER`: `plain` or `color`
    ///
    /// Unset or blank variables fall back to the defaults; set but unparsable
    /// ones are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let size = match env_value("TUI2048_SIZE") {
            Some(s) => parse_usize("TUI2048_SIZE", &s)?,
            None => defaults.size,
        };

        let init_blocks = match env_value("TUI2048_INIT_BLOCKS") {
            Some(s) => parse_usize("TUI2048_INIT_BLOCKS", &s)?,
            None => defaults.init_blocks,
        };

        let spawn_counts = match env_value("TUI2048_SPAWN_COUNTS") {
            Some(s) => parse_spawn_counts("TUI2048_SPAWN_COUNTS", &s)?,
            None => defaults.spawn_counts,
        };

        let render_mode = match env_value("TUI2048_RENDER") {
            Some(s) => RenderMode::from_str(&s).ok_or(ConfigError::InvalidEnv {
                var: "TUI2048_RENDER",
                value: s,
            })?,
            None => defaults.render_mode,
        };

        Self::new(size, init_blocks, spawn_counts, render_mode)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            init_blocks: DEFAULT_INIT_BLOCKS,
            spawn_counts: DEFAULT_SPAWN_COUNTS.to_vec(),
            render_mode: DEFAULT_RENDER_MODE,
        }
    }
}

fn env_value(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

fn parse_usize(var: &'static str, s: &str) -> Result<usize, ConfigError> {
    s.parse().map_err(|_| ConfigError::InvalidEnv {
        var,
        value: s.to_string(),
    })
}

/// Parse a comma-separated list of spawn counts.
pub fn parse_spawn_counts(var: &'static str, s: &str) -> Result<Vec<usize>, ConfigError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_usize(var, part))
        .collect()
}
