use rand::Rng;
use std::collections::VecDeque;

use super::geometry::{Cell, Grid};

/// Pick a random grid cell not covered by the snake.
///
/// Cells are drawn uniformly and redrawn until one is free. Returns `None`
/// when the snake already covers every cell, so the sampling loop only runs
/// when it is guaranteed to finish.
pub fn place<R: Rng + ?Sized>(grid: &Grid, snake: &VecDeque<Cell>, rng: &mut R) -> Option<Cell> {
    if snake.len() >= grid.cell_count() {
        return None;
    }

    loop {
        let cell = grid.cell_at(rng.gen_range(0..grid.cols()), rng.gen_range(0..grid.rows()));
        if !snake.contains(&cell) {
            return Some(cell);
        }
    }
}
