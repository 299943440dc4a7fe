//! Core game logic: grid geometry, game state, movement and food placement.
//!
//! Nothing in here touches the terminal, so every rule can be exercised
//! without a drawing surface or a timer.

pub mod direction;
pub mod engine;
pub mod food;
pub mod geometry;
pub mod state;

pub use direction::Direction;
pub use engine::{Collision, GameEngine, TickOutcome};
pub use geometry::{Cell, Grid, CELL_SIZE};
pub use state::{GameState, FOOD_SCORE};
