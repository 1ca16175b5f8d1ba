use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, INITIAL_BODY_LENGTH};
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Whether the session is still accepting gameplay ticks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RunState {
    Running,
    Ended,
}

const START_HEADING: Direction = Direction::Right;
const START_CELL: Position = Position { x: 0, y: 0 };

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: RunState,
    grid: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(grid: GridSize, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: GridSize, mut rng: StdRng) -> Self {
        let snake = starting_snake(grid);
        let food = Food::spawn(&mut rng, grid);

        Self {
            snake,
            food,
            score: 0,
            status: RunState::Running,
            grid,
            rng,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Movement first, then the item check, then the collision check. The
    /// call is a no-op once the session has ended.
    pub fn advance(&mut self) {
        if self.status != RunState::Running {
            return;
        }

        self.snake.advance();
        self.check_item();
        self.check_collisions();
    }

    /// Requests a heading change.
    ///
    /// Reversals of the current heading and post-game requests are ignored.
    pub fn request_heading_change(&mut self, next: Direction) {
        if self.status == RunState::Running {
            self.snake.request_heading(next);
        }
    }

    /// Restores the starting state and places a fresh item.
    pub fn reset(&mut self) {
        self.snake = starting_snake(self.grid);
        self.food = Food::spawn(&mut self.rng, self.grid);
        self.score = 0;
        self.status = RunState::Running;
    }

    /// Returns true while the session accepts gameplay ticks.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == RunState::Running
    }

    /// Returns the playfield dimensions in cells.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.grid
    }

    fn check_item(&mut self) {
        if self.snake.head() == self.food.position {
            self.snake.grow_next();
            self.score += 1;
            self.food = Food::spawn(&mut self.rng, self.grid);
        }
    }

    fn check_collisions(&mut self) {
        let head = self.snake.head();
        if !head.is_within_bounds(self.grid) || self.snake.head_overlaps_body() {
            self.status = RunState::Ended;
        }
    }
}

fn starting_snake(grid: GridSize) -> Snake {
    // All segments start stacked on the origin cell and unroll as the snake
    // moves; collision runs after the move, so the stack never self-collides.
    Snake::new(
        START_CELL,
        START_HEADING,
        INITIAL_BODY_LENGTH,
        grid.total_cells(),
    )
}
