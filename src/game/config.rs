use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest grid the terminal renderer can lay out
pub const MAX_TILE_COUNT: u32 = 200;

/// Configuration for the game
///
/// Every field has a default, so a config file only needs to list the values
/// it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of one grid cell in pixels
    pub grid_size: u32,
    /// Number of cells per axis (the grid is tile_count x tile_count)
    pub tile_count: u32,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    /// Move interval at the start of a game, in milliseconds
    pub initial_move_interval_ms: u64,
    /// How much the move interval shrinks per food eaten
    pub interval_decrement_ms: u64,
    /// The move interval never drops below this
    pub min_move_interval_ms: u64,

    /// Points awarded per food eaten
    pub score_per_food: u32,
    /// Random draws tried before falling back to scanning for free cells
    pub food_placement_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            tile_count: 25,
            initial_snake_length: 3,
            initial_move_interval_ms: 150,
            interval_decrement_ms: 2,
            min_move_interval_ms: 50,
            score_per_food: 10,
            food_placement_attempts: 64,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(tile_count: u32) -> Self {
        Self {
            tile_count,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Check that a game can actually be started with these settings
    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid_size > 0, "grid_size must be positive");
        ensure!(self.tile_count > 0, "tile_count must be positive");
        ensure!(
            self.tile_count <= MAX_TILE_COUNT,
            "tile_count {} exceeds the maximum of {}",
            self.tile_count,
            MAX_TILE_COUNT
        );
        ensure!(
            self.tile_count.checked_mul(self.grid_size).is_some(),
            "canvas of {} cells at {} px overflows",
            self.tile_count,
            self.grid_size
        );
        ensure!(
            self.initial_snake_length >= 1,
            "initial_snake_length must be at least 1"
        );

        // The body extends left of the centred head
        let room_left = (self.tile_count / 2) as usize;
        ensure!(
            self.initial_snake_length <= room_left + 1,
            "initial_snake_length {} does not fit on a {}x{} grid",
            self.initial_snake_length,
            self.tile_count,
            self.tile_count
        );
        ensure!(
            self.cell_count() > self.initial_snake_length,
            "no free cell left for food on a {}x{} grid",
            self.tile_count,
            self.tile_count
        );

        ensure!(
            self.min_move_interval_ms > 0,
            "min_move_interval_ms must be positive"
        );
        ensure!(
            self.min_move_interval_ms <= self.initial_move_interval_ms,
            "min_move_interval_ms ({}) exceeds initial_move_interval_ms ({})",
            self.min_move_interval_ms,
            self.initial_move_interval_ms
        );
        Ok(())
    }

    /// Total number of cells on the grid
    pub fn cell_count(&self) -> usize {
        (self.tile_count as usize) * (self.tile_count as usize)
    }

    /// Canvas side length in pixels
    pub fn canvas_size(&self) -> u32 {
        self.tile_count.saturating_mul(self.grid_size)
    }

    pub fn initial_move_interval(&self) -> Duration {
        Duration::from_millis(self.initial_move_interval_ms)
    }

    /// The move interval after eating one more food
    pub fn next_move_interval(&self, current: Duration) -> Duration {
        let decrement = Duration::from_millis(self.interval_decrement_ms);
        let floor = Duration::from_millis(self.min_move_interval_ms);
        current.saturating_sub(decrement).max(floor)
    }
}
