//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The host feeds it one [`crate::input::FrameInput`] and the elapsed time per frame.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::{GameConfig, MAX_TILE_COUNT};
pub use direction::Direction;
pub use engine::{GameEngine, StepOutcome};
pub use state::{Cell, CollisionType, GameEnd, GameState, GameStatus, Snake};
