//! Startup configuration for a puzzle session.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Startup constants for a puzzle session.
///
/// These are fixed at construction and never mutated at runtime. The
/// canvas is square; `canvas_width` must divide evenly by `grid_dim` so
/// tiles align exactly on cell boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Tiles per side of the square grid.
    #[serde(default = "default_grid_dim")]
    grid_dim: u16,

    /// Canvas width (and height) in pixels.
    #[serde(default = "default_canvas_width")]
    canvas_width: u32,

    /// Exclusive upper bound on the number of scramble steps; the actual
    /// count is drawn uniformly from `[0, shuffle_bound)`.
    #[serde(default = "default_shuffle_bound")]
    shuffle_bound: u32,
}

fn default_grid_dim() -> u16 {
    4
}

fn default_canvas_width() -> u32 {
    500
}

fn default_shuffle_bound() -> u32 {
    200
}

impl GameConfig {
    /// Creates a validated configuration.
    #[instrument]
    pub fn new(grid_dim: u16, canvas_width: u32, shuffle_bound: u32) -> Result<Self, ConfigError> {
        let config = Self {
            grid_dim,
            canvas_width,
            shuffle_bound,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            grid_dim = config.grid_dim,
            canvas_width = config.canvas_width,
            shuffle_bound = config.shuffle_bound,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Width of a single tile in pixels. Exact, because validation
    /// requires even divisibility.
    pub fn tile_width(&self) -> f32 {
        (self.canvas_width / self.grid_dim as u32) as f32
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=16).contains(&self.grid_dim) {
            return Err(ConfigError::new(format!(
                "grid_dim must be between 2 and 16, got {}",
                self.grid_dim
            )));
        }
        if self.canvas_width == 0 {
            return Err(ConfigError::new("canvas_width must be positive".to_string()));
        }
        if self.canvas_width % self.grid_dim as u32 != 0 {
            return Err(ConfigError::new(format!(
                "canvas_width {} is not evenly divisible by grid_dim {}",
                self.canvas_width, self.grid_dim
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_dim: default_grid_dim(),
            canvas_width: default_canvas_width(),
            shuffle_bound: default_shuffle_bound(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
