//! Grid Snake - a grid-based snake game for the terminal
//!
//! This library provides:
//! - Core game logic with no I/O (game module)
//! - Keyboard input mapping (input module)
//! - Scene projection and TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
