//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The board is a torus: leaving one edge brings the snake back on the opposite one.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use direction::Direction;
pub use engine::{GameEngine, TickInfo, TickResult};
pub use grid::{CellType, Grid};
pub use state::{CollisionType, GameState, Position, Snake, StepOutcome};
