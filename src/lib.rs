//! Torus Snake - Snake on a board whose edges wrap around
//!
//! This library provides:
//! - Core game logic: state, pure step function, food and scoring (game module)
//! - The hosting session and its tick clock (session module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod session;
