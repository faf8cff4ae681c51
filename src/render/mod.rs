//! Presentation: scene projection and the terminal renderer

pub mod renderer;
pub mod scene;

pub use renderer::Renderer;
pub use scene::{DrawCommand, Label, PixelRect, Scene, Sprite};
