use super::{
    config::GameConfig,
    direction::Direction,
    state::{Cell, CollisionType, GameEnd, GameState, GameStatus, Snake},
};
use crate::input::FrameInput;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// What a call to [`GameEngine::step`] or [`GameEngine::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing moved: the move interval has not elapsed, or the game is over
    Waiting,
    /// The snake moved one cell without eating
    Moved,
    /// The snake moved onto the food and grew
    AteFood,
    /// The snake hit a wall or itself; the game is now over
    Collision(CollisionType),
    /// The snake ate the last food and now covers the whole grid; the game is over
    BoardFull,
    /// A finished game was reset to its starting state
    Restarted,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the starting state: a centred snake heading right and one food
    pub fn reset(&mut self) -> GameState {
        let mut state = GameState::new(self.initial_snake(), None, &self.config);
        state.food = self.place_food(&state.snake);
        state
    }

    /// Run one frame: handle restart or turning, then try to move
    pub fn step(
        &mut self,
        state: &mut GameState,
        input: FrameInput,
        elapsed: Duration,
    ) -> StepOutcome {
        if state.is_game_over() {
            if input.restart && self.restart(state) {
                return StepOutcome::Restarted;
            }
            return StepOutcome::Waiting;
        }

        // Each press is checked in turn, so a rejected reversal does not
        // discard an earlier valid turn from the same frame
        for direction in input.directions {
            self.advance_direction(state, direction);
        }

        self.tick(state, elapsed)
    }

    /// Request a turn for the next move (180-degree turns are ignored)
    ///
    /// The request is checked against the direction of the last completed move,
    /// so several key presses between two moves can never reverse the snake
    /// into its own neck.
    pub fn advance_direction(&self, state: &mut GameState, requested: Direction) {
        if state.is_game_over() {
            return;
        }
        if !state.snake.direction.is_opposite(requested) {
            state.pending_direction = requested;
        }
    }

    /// Move the snake one cell if the move interval has elapsed
    pub fn tick(&mut self, state: &mut GameState, elapsed: Duration) -> StepOutcome {
        if state.is_game_over() {
            return StepOutcome::Waiting;
        }
        if elapsed.saturating_sub(state.last_move_time) <= state.move_interval {
            return StepOutcome::Waiting;
        }
        state.last_move_time = elapsed;

        let direction = state.pending_direction;
        let new_head = state.snake.head().moved_in_direction(direction);

        if let Some(collision_type) = self.check_collision(state, new_head) {
            debug!("collision {:?} at {:?}", collision_type, new_head);
            state.status = GameStatus::GameOver(GameEnd::Collision(collision_type));
            return StepOutcome::Collision(collision_type);
        }

        state.snake.direction = direction;
        let ate_food = state.food == Some(new_head);
        state.snake.advance_to(new_head, ate_food);

        if !ate_food {
            return StepOutcome::Moved;
        }

        state.score += self.config.score_per_food;
        state.move_interval = self.config.next_move_interval(state.move_interval);
        debug!(
            "ate food at {:?}: score {}, interval {:?}",
            new_head, state.score, state.move_interval
        );

        state.food = self.place_food(&state.snake);
        if state.food.is_none() {
            info!("board full at score {}", state.score);
            state.status = GameStatus::GameOver(GameEnd::BoardFull);
            return StepOutcome::BoardFull;
        }

        StepOutcome::AteFood
    }

    /// Reset a finished game; returns false (and does nothing) while running
    pub fn restart(&mut self, state: &mut GameState) -> bool {
        if !state.is_game_over() {
            return false;
        }

        let last_move_time = state.last_move_time;
        *state = self.reset();
        state.last_move_time = last_move_time;
        true
    }

    /// Pick a uniformly random cell not covered by the snake
    ///
    /// Returns `None` when the snake covers every cell.
    pub fn place_food(&mut self, snake: &Snake) -> Option<Cell> {
        let n = i32::try_from(self.config.tile_count).unwrap_or(i32::MAX);
        if n <= 0 {
            return None;
        }

        for _ in 0..self.config.food_placement_attempts {
            let cell = Cell::new(self.rng.gen_range(0..n), self.rng.gen_range(0..n));
            if !snake.occupies(cell) {
                return Some(cell);
            }
        }

        // Crowded board: sample directly from what is left
        let free: Vec<Cell> = (0..n)
            .flat_map(|row| (0..n).map(move |col| Cell::new(col, row)))
            .filter(|cell| !snake.occupies(*cell))
            .collect();

        let cell = free.choose(&mut self.rng).copied();
        if cell.is_none() {
            warn!("no free cell left for food");
        }
        cell
    }

    fn initial_snake(&self) -> Snake {
        let center = (self.config.tile_count / 2) as i32;
        Snake::new(
            Cell::new(center, center),
            Direction::Right,
            self.config.initial_snake_length,
        )
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, cell: Cell) -> Option<CollisionType> {
        if !state.is_in_bounds(cell) {
            return Some(CollisionType::Wall);
        }

        if state.is_occupied_by_snake(cell) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }
}
