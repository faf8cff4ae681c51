//! Keyboard input: raw key events to game actions and per-frame snapshots

pub mod frame;
pub mod handler;

pub use frame::FrameInput;
pub use handler::{InputHandler, KeyAction};
