use log::{error, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use super::food;
use super::geometry::Grid;
use super::state::{GameState, FOOD_SCORE};
use crate::score::ScoreStore;

/// What the snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was already over
    Idle,
    Moved,
    Ate,
    Collided(Collision),
    /// The snake ate the last free cell
    Won,
}

/// Advances a `GameState` one grid step at a time
pub struct GameEngine<S, R = ThreadRng> {
    store: S,
    rng: R,
}

impl<S: ScoreStore> GameEngine<S, ThreadRng> {
    pub fn new(store: S) -> Self {
        Self::with_rng(store, rand::thread_rng())
    }
}

impl<S: ScoreStore, R: Rng> GameEngine<S, R> {
    pub fn with_rng(store: S, rng: R) -> Self {
        Self { store, rng }
    }

    /// Start a session, seeding the best score from the store
    pub fn new_game(&mut self, grid: Grid) -> GameState {
        let best_score = self.store.load();
        GameState::new(grid, best_score, &mut self.rng)
    }

    pub fn reset(&mut self, state: &mut GameState) {
        state.reset(&mut self.rng);
        info!("Game restarted (best score {})", state.best_score);
    }

    /// Execute one step of the game
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if state.game_over {
            return TickOutcome::Idle;
        }

        let new_head = state.head().stepped(state.direction);

        // Check for collisions with walls
        if !state.grid().contains(new_head) {
            return self.end(state, Collision::Wall);
        }

        // Check for collisions with self, tail included
        if state.is_occupied(new_head) {
            return self.end(state, Collision::SelfCollision);
        }

        state.snake.push_front(new_head);

        if state.food != Some(new_head) {
            state.snake.pop_back();
            return TickOutcome::Moved;
        }

        state.score += FOOD_SCORE;
        if state.score > state.best_score {
            self.record_best(state);
        }

        state.food = food::place(state.grid(), &state.snake, &mut self.rng);
        match state.food {
            Some(_) => TickOutcome::Ate,
            None => {
                info!("Snake fills the playfield, final score {}", state.score);
                state.game_over = true;
                state.won = true;
                TickOutcome::Won
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn end(&mut self, state: &mut GameState, collision: Collision) -> TickOutcome {
        info!(
            "Game over: {:?} at ({}, {}), score {}",
            collision,
            state.head().x,
            state.head().y,
            state.score
        );
        state.game_over = true;
        TickOutcome::Collided(collision)
    }

    fn record_best(&mut self, state: &mut GameState) {
        state.best_score = state.score;
        match self.store.save(state.best_score) {
            Ok(()) => info!("New best score {}", state.best_score),
            Err(e) => error!("Error saving best score: {:#}", e),
        }
    }
}
