use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use log::debug;
use rand::Rng;

use crate::game::{Direction, GameEngine, GameState};
use crate::score::ScoreStore;

/// A request decoded from raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Restart,
    Quit,
}

/// Whether the loop driver should keep going after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Turns key presses and swipe gestures into game commands.
///
/// A left mouse press marks the start of a gesture and the matching
/// release marks its end.
#[derive(Debug, Default)]
pub struct InputMapper {
    touch_start: Option<(i32, i32)>,
    min_swipe: u16,
}

impl InputMapper {
    pub fn new(min_swipe: u16) -> Self {
        Self {
            touch_start: None,
            min_swipe,
        }
    }

    /// Decode `event` and apply it to `state`
    pub fn handle<S: ScoreStore, R: Rng>(
        &mut self,
        event: &Event,
        state: &mut GameState,
        engine: &mut GameEngine<S, R>,
    ) -> Control {
        match self.map_event(event, state.game_over) {
            Some(Command::Turn(direction)) => {
                state.set_direction(direction);
            }
            Some(Command::Restart) if state.game_over => engine.reset(state),
            Some(Command::Restart) => {}
            Some(Command::Quit) => return Control::Quit,
            None => {}
        }
        Control::Continue
    }

    pub fn map_event(&mut self, event: &Event, game_over: bool) -> Option<Command> {
        match event {
            Event::Key(key) => self.map_key(*key, game_over),
            Event::Mouse(mouse) => self.map_mouse(*mouse, game_over),
            _ => None,
        }
    }

    pub fn map_key(&self, key: KeyEvent, game_over: bool) -> Option<Command> {
        // Only process key press events, not repeats or releases
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(Command::Turn(Direction::Up))
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                Some(Command::Turn(Direction::Down))
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                Some(Command::Turn(Direction::Left))
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(Command::Turn(Direction::Right))
            }
            KeyCode::Char(' ') if game_over => Some(Command::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn map_mouse(&mut self, mouse: MouseEvent, game_over: bool) -> Option<Command> {
        let point = (i32::from(mouse.column), i32::from(mouse.row));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.touch_start = Some(point);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let start = self.touch_start.take();
                if game_over {
                    return Some(Command::Restart);
                }
                start.and_then(|start| self.map_swipe(start, point))
            }
            _ => None,
        }
    }

    /// Pick a direction from a gesture: the dominant axis wins, ties go vertical
    pub fn map_swipe(&self, start: (i32, i32), end: (i32, i32)) -> Option<Command> {
        let dx = end.0 - start.0;
        let dy = end.1 - start.1;

        if dx.abs().max(dy.abs()) < i32::from(self.min_swipe.max(1)) {
            debug!("ignoring swipe ({}, {})", dx, dy);
            return None;
        }

        let direction = if dx.abs() > dy.abs() {
            if dx > 0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        };
        Some(Command::Turn(direction))
    }
}
