//! Pure projection from game state to draw commands
//!
//! A [`Scene`] describes one frame without touching any backend: squares at grid
//! cells (with their pixel rectangles) and text labels at pixel anchors. The
//! terminal renderer consumes it, and tests can inspect it directly.

use crate::game::{Cell, GameConfig, GameEnd, GameState};

pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const BOARD_FULL_TEXT: &str = "BOARD FULL";
pub const RESTART_TEXT: &str = "Press SPACE to Restart";
pub const INSTRUCTIONS_TEXT: &str = "Use arrow keys to move";

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    SnakeHead,
    SnakeBody,
    Food,
}

/// Which on-screen label a text command updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Score,
    Instructions,
    GameOver,
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillCell {
        cell: Cell,
        rect: PixelRect,
        sprite: Sprite,
    },
    Text {
        label: Label,
        text: String,
        /// Pixel position; centred labels use it as their midpoint
        x: u32,
        y: u32,
        centered: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub tile_count: u32,
    /// Canvas side length in pixels
    pub canvas_size: u32,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn project(state: &GameState, config: &GameConfig) -> Self {
        let canvas_size = config.canvas_size();
        let mut commands = Vec::with_capacity(state.snake.len() + 5);

        for (i, &cell) in state.snake.body.iter().enumerate() {
            let sprite = if i == 0 {
                Sprite::SnakeHead
            } else {
                Sprite::SnakeBody
            };
            commands.push(fill(cell, sprite, config.grid_size));
        }
        if let Some(food) = state.food {
            commands.push(fill(food, Sprite::Food, config.grid_size));
        }

        commands.push(DrawCommand::Text {
            label: Label::Score,
            text: format!("Score: {}", state.score),
            x: 16,
            y: 16,
            centered: false,
        });
        commands.push(DrawCommand::Text {
            label: Label::Instructions,
            text: INSTRUCTIONS_TEXT.to_string(),
            x: 16,
            y: canvas_size.saturating_sub(50),
            centered: false,
        });

        if let Some(end) = state.game_end() {
            let headline = match end {
                GameEnd::Collision(_) => GAME_OVER_TEXT,
                GameEnd::BoardFull => BOARD_FULL_TEXT,
            };
            commands.push(DrawCommand::Text {
                label: Label::GameOver,
                text: headline.to_string(),
                x: canvas_size / 2,
                y: canvas_size / 2,
                centered: true,
            });
            commands.push(DrawCommand::Text {
                label: Label::Restart,
                text: RESTART_TEXT.to_string(),
                x: canvas_size / 2,
                y: canvas_size / 2 + 50,
                centered: true,
            });
        }

        Self {
            tile_count: config.tile_count,
            canvas_size,
            commands,
        }
    }

    /// Sprites laid out by row then column; the snake wins over food
    pub fn sprite_grid(&self) -> Vec<Vec<Option<Sprite>>> {
        let n = self.tile_count as usize;
        let mut grid = vec![vec![None; n]; n];

        for command in &self.commands {
            let DrawCommand::FillCell { cell, sprite, .. } = command else {
                continue;
            };
            if cell.col < 0 || cell.row < 0 {
                continue;
            }
            let Some(slot) = grid
                .get_mut(cell.row as usize)
                .and_then(|row| row.get_mut(cell.col as usize))
            else {
                continue;
            };
            if slot.is_none() || *sprite != Sprite::Food {
                *slot = Some(*sprite);
            }
        }
        grid
    }

    /// Current text of a label, if it is shown
    pub fn label(&self, label: Label) -> Option<&str> {
        self.commands.iter().find_map(|command| match command {
            DrawCommand::Text { label: l, text, .. } if *l == label => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.label(Label::GameOver).is_some()
    }
}

fn fill(cell: Cell, sprite: Sprite, grid_size: u32) -> DrawCommand {
    DrawCommand::FillCell {
        cell,
        rect: PixelRect {
            x: (cell.col.max(0) as u32).saturating_mul(grid_size),
            y: (cell.row.max(0) as u32).saturating_mul(grid_size),
            width: grid_size,
            height: grid_size,
        },
        sprite,
    }
}
