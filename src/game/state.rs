use log::debug;
use rand::Rng;
use std::collections::VecDeque;

use super::direction::Direction;
use super::food;
use super::geometry::{Cell, Grid};

/// Points awarded for each piece of food
pub const FOOD_SCORE: u32 = 10;

/// Complete state of one game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Body segments, head at the front
    pub snake: VecDeque<Cell>,
    /// Direction applied on the next tick
    pub direction: Direction,
    /// Never on the snake; `None` once the snake fills the playfield
    pub food: Option<Cell>,
    pub score: u32,
    pub best_score: u32,
    pub game_over: bool,
    /// Set together with `game_over` when the snake fills the playfield
    pub won: bool,
    grid: Grid,
}

impl GameState {
    /// Start a fresh game; `best_score` carries over from earlier sessions
    pub fn new<R: Rng + ?Sized>(grid: Grid, best_score: u32, rng: &mut R) -> Self {
        let mut state = Self {
            snake: VecDeque::new(),
            direction: Direction::Right,
            food: None,
            score: 0,
            best_score,
            game_over: false,
            won: false,
            grid,
        };
        state.reset(rng);
        state
    }

    /// Build a state with an explicit layout, keeping `score` at zero.
    ///
    /// Panics if `snake` is empty.
    pub fn with_layout(
        grid: Grid,
        snake: impl IntoIterator<Item = Cell>,
        direction: Direction,
        food: Cell,
        best_score: u32,
    ) -> Self {
        let snake: VecDeque<Cell> = snake.into_iter().collect();
        assert!(!snake.is_empty(), "snake needs at least one segment");

        Self {
            snake,
            direction,
            food: Some(food),
            score: 0,
            best_score,
            game_over: false,
            won: false,
            grid,
        }
    }

    /// Put everything except the best score back to its starting value
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.snake.clear();
        self.snake.push_back(self.grid.origin());
        self.direction = Direction::Right;
        self.score = 0;

        self.food = food::place(&self.grid, &self.snake, rng);
        // A one-cell playfield is already full
        self.game_over = self.food.is_none();
        self.won = self.game_over;
    }

    /// Request a new direction for the next tick.
    ///
    /// Ignored when it is the opposite of the current direction. Returns
    /// whether the request was applied.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) {
            debug!("ignoring reversal to {:?}", direction);
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn head(&self) -> Cell {
        // Length >= 1 is kept by every constructor and by the engine
        self.snake[0]
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    /// True when food exists and sits on a free cell
    pub fn food_is_free(&self) -> bool {
        self.food.is_some_and(|food| !self.is_occupied(food))
    }
}
