use std::time::Duration;

use super::config::GameConfig;
use super::direction::Direction;

/// A cell on the game grid, addressed by column and row
///
/// Coordinates are signed so a head that has left the grid can still be
/// represented and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }

    /// Move cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dcol, drow) = direction.delta();
        self.moved_by(dcol, drow)
    }

    /// True if the two cells share an edge
    pub fn is_adjacent(&self, other: Cell) -> bool {
        (self.col - other.col).abs() + (self.row - other.row).abs() == 1
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Cell>,
    /// Direction used by the last completed move
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given head cell and direction, body trailing behind
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        let (dcol, drow) = direction.delta();
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(-dcol, -drow));
        }

        Self { body, direction }
    }

    /// Create a snake from explicit segments, head first
    pub fn from_cells(body: Vec<Cell>, direction: Direction) -> Self {
        debug_assert!(!body.is_empty(), "a snake needs at least one cell");
        Self { body, direction }
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail cell (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Check if a cell is covered by any segment, head and tail included
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Put a new head in front; drop the tail unless growing
    pub fn advance_to(&mut self, new_head: Cell, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Why a game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Collision(CollisionType),
    /// The snake filled every cell, so no food could be placed
    BoardFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver(GameEnd),
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Direction requested for the next move
    pub pending_direction: Direction,
    /// `None` only once the board is full
    pub food: Option<Cell>,
    pub tile_count: u32,
    pub score: u32,
    pub move_interval: Duration,
    /// Elapsed time at which the last move happened
    pub last_move_time: Duration,
    pub status: GameStatus,
}

impl GameState {
    /// Create a running game state with no moves made yet
    pub fn new(snake: Snake, food: Option<Cell>, config: &GameConfig) -> Self {
        Self {
            pending_direction: snake.direction,
            snake,
            food,
            tile_count: config.tile_count,
            score: 0,
            move_interval: config.initial_move_interval(),
            last_move_time: Duration::ZERO,
            status: GameStatus::Running,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }

    /// The reason the game ended, if it has
    pub fn game_end(&self) -> Option<GameEnd> {
        match self.status {
            GameStatus::Running => None,
            GameStatus::GameOver(end) => Some(end),
        }
    }

    /// Check if a cell is within the grid bounds
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        let n = i32::try_from(self.tile_count).unwrap_or(i32::MAX);
        cell.col >= 0 && cell.col < n && cell.row >= 0 && cell.row < n
    }

    /// Check if a cell is occupied by the snake
    pub fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.snake.occupies(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.moved_by(1, 0), Cell::new(6, 5));
        assert_eq!(cell.moved_by(-1, 0), Cell::new(4, 5));
        assert_eq!(cell.moved_in_direction(Direction::Down), Cell::new(5, 6));
        assert_eq!(cell.moved_in_direction(Direction::Up), Cell::new(5, 4));
    }

    #[test]
    fn test_adjacency() {
        let cell = Cell::new(3, 3);
        assert!(cell.is_adjacent(Cell::new(4, 3)));
        assert!(cell.is_adjacent(Cell::new(3, 2)));
        assert!(!cell.is_adjacent(Cell::new(4, 4)));
        assert!(!cell.is_adjacent(cell));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(12, 12), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(12, 12));
        assert_eq!(snake.body[1], Cell::new(11, 12));
        assert_eq!(snake.tail(), Cell::new(10, 12));
        assert!(snake.body.windows(2).all(|w| w[0].is_adjacent(w[1])));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);

        snake.advance_to(Cell::new(6, 5), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.tail(), Cell::new(4, 5));

        snake.advance_to(Cell::new(7, 5), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(7, 5));
        assert_eq!(snake.tail(), Cell::new(4, 5));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "a snake needs at least one cell")]
    fn test_snake_from_no_cells() {
        Snake::from_cells(Vec::new(), Direction::Right);
    }

    #[test]
    fn test_occupancy() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        assert!(snake.occupies(Cell::new(5, 5)));
        assert!(snake.occupies(Cell::new(3, 5)));
        assert!(!snake.occupies(Cell::new(6, 5)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Cell::new(5, 5), Direction::Right, 3),
            Some(Cell::new(10, 10)),
            &GameConfig::new(20),
        );

        assert!(state.is_in_bounds(Cell::new(0, 0)));
        assert!(state.is_in_bounds(Cell::new(19, 19)));
        assert!(!state.is_in_bounds(Cell::new(-1, 0)));
        assert!(!state.is_in_bounds(Cell::new(0, -1)));
        assert!(!state.is_in_bounds(Cell::new(20, 0)));
        assert!(!state.is_in_bounds(Cell::new(0, 20)));
    }

    #[test]
    fn test_status_helpers() {
        let mut state = GameState::new(
            Snake::new(Cell::new(5, 5), Direction::Right, 3),
            Some(Cell::new(1, 1)),
            &GameConfig::small(),
        );
        assert!(!state.is_game_over());
        assert_eq!(state.game_end(), None);
        assert_eq!(state.pending_direction, Direction::Right);

        state.status = GameStatus::GameOver(GameEnd::Collision(CollisionType::Wall));
        assert!(state.is_game_over());
        assert_eq!(
            state.game_end(),
            Some(GameEnd::Collision(CollisionType::Wall))
        );
    }
}
