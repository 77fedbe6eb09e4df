use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use super::state::Position;

/// Board side length used by the default configuration
pub const DEFAULT_GRID_SIZE: usize = 25;

/// Largest accepted grid side. Keeps coordinates well inside `i32` and the
/// cell buffer a sane size.
pub const MAX_GRID_SIZE: usize = 4096;

/// Wall-clock time between two ticks in the default configuration
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 500;

/// Problems found while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("grid sides are capped at {max}, got {width}x{height}")]
    GridTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("initial snake needs at least one segment")]
    EmptySnake,
    #[error("initial food needs at least one cell")]
    EmptyFood,
    #[error("{what} at ({x}, {y}) lies outside the {width}x{height} grid")]
    OutOfBounds {
        what: &'static str,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error("initial snake visits ({x}, {y}) more than once")]
    DuplicateSegment { x: i32, y: i32 },
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,
    /// Snake restored on every reset, head first
    pub initial_snake: Vec<Position>,
    /// Food restored on every reset
    pub initial_food: Vec<Position>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_SIZE,
            grid_height: DEFAULT_GRID_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            initial_snake: vec![
                Position::new(8, 12),
                Position::new(7, 12),
                Position::new(6, 12),
            ],
            initial_food: vec![Position::new(4, 10)],
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check that the default state this config describes is playable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.grid_width > MAX_GRID_SIZE || self.grid_height > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                max: MAX_GRID_SIZE,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.initial_snake.is_empty() {
            return Err(ConfigError::EmptySnake);
        }
        if self.initial_food.is_empty() {
            return Err(ConfigError::EmptyFood);
        }

        let mut seen = HashSet::with_capacity(self.initial_snake.len());
        for &pos in &self.initial_snake {
            self.check_in_bounds("snake segment", pos)?;
            if !seen.insert(pos) {
                return Err(ConfigError::DuplicateSegment { x: pos.x, y: pos.y });
            }
        }
        for &pos in &self.initial_food {
            self.check_in_bounds("food", pos)?;
        }

        Ok(())
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    fn check_in_bounds(&self, what: &'static str, pos: Position) -> Result<(), ConfigError> {
        if self.is_in_bounds(pos) {
            Ok(())
        } else {
            Err(ConfigError::OutOfBounds {
                what,
                x: pos.x,
                y: pos.y,
                width: self.grid_width,
                height: self.grid_height,
            })
        }
    }
}
