use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

use crate::game::{GameEngine, GameState, Grid};
use crate::input::{Control, InputMapper};
use crate::render::Renderer;
use crate::score::ScoreStore;

/// Owns the game state and drives it from a fixed-interval tick
pub struct App<S> {
    engine: GameEngine<S>,
    state: GameState,
    input: InputMapper,
    renderer: Renderer,
    tick_interval: Duration,
    last_update: Instant,
}

impl<S: ScoreStore> App<S> {
    pub fn new(grid: Grid, store: S, tick_interval: Duration, min_swipe: u16) -> Self {
        let mut engine = GameEngine::new(store);
        let state = engine.new_game(grid);

        Self {
            engine,
            state,
            input: InputMapper::new(min_swipe),
            renderer: Renderer::new(),
            tick_interval,
            last_update: Instant::now(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let setup = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)
            .context("Failed to prepare terminal");

        let result = setup.and_then(|()| self.run_loop());

        // Restore the terminal even when the loop failed
        let restored = restore_terminal();
        if let Err(e) = &result {
            error!("Game loop failed: {:#}", e);
        }
        result?;
        restored?;

        println!(
            "Final score: {}  High score: {}",
            self.state.score, self.state.best_score
        );
        Ok(())
    }

    fn run_loop(&mut self) -> Result<()> {
        let mut out = stdout();
        self.renderer
            .draw(&mut out, &self.state)
            .context("Failed to draw frame")?;
        self.last_update = Instant::now();

        loop {
            // Handle input until the next tick is due
            let timeout = self
                .tick_interval
                .saturating_sub(self.last_update.elapsed());
            if event::poll(timeout).context("Failed to poll for input")? {
                let event = event::read().context("Failed to read input")?;
                if let Event::Resize(..) = event {
                    self.renderer
                        .draw(&mut out, &self.state)
                        .context("Failed to draw frame")?;
                }
                if self.input.handle(&event, &mut self.state, &mut self.engine) == Control::Quit {
                    info!("Quit requested");
                    break;
                }
            }

            if self.last_update.elapsed() >= self.tick_interval {
                self.engine.tick(&mut self.state);
                self.renderer
                    .draw(&mut out, &self.state)
                    .context("Failed to draw frame")?;
                self.last_update = Instant::now();
            }
        }

        out.flush().context("Failed to flush terminal")?;
        Ok(())
    }
}

fn restore_terminal() -> Result<()> {
    execute!(stdout(), Show, DisableMouseCapture, LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal::disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}
