use crossterm::{
    cursor::MoveTo,
    queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

use crate::game::{Cell, Direction, GameState};

/// Rows above the playfield border used for the score lines
const HEADER_ROWS: u16 = 2;
/// Terminal columns per grid cell
const CELL_WIDTH: u16 = 2;

const BOARD_LIGHT: Color = Color::Rgb { r: 0x30, g: 0x30, b: 0x30 };
const BOARD_DARK: Color = Color::Rgb { r: 0x24, g: 0x24, b: 0x24 };
const HEAD: Color = Color::Rgb { r: 0x00, g: 0x64, b: 0x00 };
const BODY_LIGHT: Color = Color::Rgb { r: 0x32, g: 0xcd, b: 0x32 };
const BODY_DARK: Color = Color::Rgb { r: 0x22, g: 0x8b, b: 0x22 };
const FOOD: Color = Color::Rgb { r: 0xff, g: 0x00, b: 0x00 };
const BORDER: Color = Color::Grey;

/// Draws a `GameState` onto a terminal (or anything else that implements `Write`)
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn draw<W: Write>(&self, out: &mut W, state: &GameState) -> io::Result<()> {
        queue!(out, ResetColor, Clear(ClearType::All), MoveTo(0, 0))?;

        queue!(
            out,
            MoveTo(0, 0),
            Print(format!("Score: {}", state.score)),
            MoveTo(0, 1),
            Print(format!("High Score: {}", state.best_score)),
        )?;

        self.draw_board(out, state)?;
        self.draw_food(out, state)?;
        self.draw_snake(out, state)?;

        let footer_row = HEADER_ROWS + state.grid().rows() + 2;
        queue!(
            out,
            ResetColor,
            MoveTo(0, footer_row),
            Print("Arrows/WASD or swipe to move, 'q' to quit"),
        )?;

        if state.game_over {
            self.draw_game_over(out, state)?;
        }

        queue!(out, ResetColor)?;
        out.flush()
    }

    fn draw_board<W: Write>(&self, out: &mut W, state: &GameState) -> io::Result<()> {
        let grid = state.grid();
        let inner_width = usize::from(grid.cols() * CELL_WIDTH);
        let edge = "#".repeat(inner_width + 2);
        let bottom = HEADER_ROWS + grid.rows() + 1;

        queue!(out, SetForegroundColor(BORDER), MoveTo(0, HEADER_ROWS), Print(&edge))?;
        for row in 0..grid.rows() {
            let y = HEADER_ROWS + 1 + row;
            queue!(
                out,
                SetForegroundColor(BORDER),
                MoveTo(0, y),
                Print("#"),
                MoveTo(1 + grid.cols() * CELL_WIDTH, y),
                Print("#"),
            )?;

            // Checkerboard background
            for col in 0..grid.cols() {
                let shade = if (col + row) % 2 == 0 { BOARD_LIGHT } else { BOARD_DARK };
                queue!(
                    out,
                    MoveTo(1 + col * CELL_WIDTH, y),
                    SetBackgroundColor(shade),
                    Print("  "),
                    ResetColor,
                )?;
            }
        }
        queue!(out, SetForegroundColor(BORDER), MoveTo(0, bottom), Print(&edge), ResetColor)?;
        Ok(())
    }

    fn draw_snake<W: Write>(&self, out: &mut W, state: &GameState) -> io::Result<()> {
        for (index, segment) in state.snake.iter().enumerate() {
            let (x, y) = screen_position(*segment);
            if index == 0 {
                queue!(
                    out,
                    MoveTo(x, y),
                    SetBackgroundColor(HEAD),
                    SetForegroundColor(Color::White),
                    Print(head_glyph(state.direction)),
                    ResetColor,
                )?;
            } else {
                let shade = if index % 2 == 0 { BODY_LIGHT } else { BODY_DARK };
                queue!(out, MoveTo(x, y), SetBackgroundColor(shade), Print("  "), ResetColor)?;
            }
        }
        Ok(())
    }

    fn draw_food<W: Write>(&self, out: &mut W, state: &GameState) -> io::Result<()> {
        let Some(food) = state.food else {
            return Ok(());
        };
        let (x, y) = screen_position(food);
        queue!(out, MoveTo(x, y), SetForegroundColor(FOOD), Print("● "), ResetColor)
    }

    fn draw_game_over<W: Write>(&self, out: &mut W, state: &GameState) -> io::Result<()> {
        let grid = state.grid();
        let title = if state.won { "YOU WIN" } else { "GAME OVER" };
        let lines = [
            title.to_string(),
            format!("Score: {}", state.score),
            "Press SPACE to restart".to_string(),
        ];

        let board_width = grid.cols() * CELL_WIDTH + 2;
        let middle = HEADER_ROWS + 1 + grid.rows() / 2;
        let top = middle.saturating_sub(1);

        for (offset, line) in (0u16..).zip(lines.iter()) {
            let len = u16::try_from(line.chars().count()).unwrap_or(u16::MAX);
            let x = board_width.saturating_sub(len) / 2;
            queue!(out, MoveTo(x, top + offset * 2), SetForegroundColor(Color::White))?;
            if offset == 0 {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, Print(line), SetAttribute(Attribute::Reset), ResetColor)?;
        }
        Ok(())
    }
}

/// Terminal column and row of the top-left character of `cell`
fn screen_position(cell: Cell) -> (u16, u16) {
    let col = u16::try_from(cell.column()).unwrap_or(0);
    let row = u16::try_from(cell.row()).unwrap_or(0);
    (1 + col * CELL_WIDTH, HEADER_ROWS + 1 + row)
}

/// Two-column head sprite facing `direction`
fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "▲ ",
        Direction::Down => "▼ ",
        Direction::Left => " ◀",
        Direction::Right => " ▶",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Grid;

    fn render(state: &GameState) -> String {
        let mut out = Vec::new();
        Renderer::new().draw(&mut out, state).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn playing_state() -> GameState {
        GameState::with_layout(
            Grid::default(),
            [Cell::new(200, 200), Cell::new(180, 200)],
            Direction::Right,
            Cell::new(40, 40),
            60,
        )
    }

    #[test]
    fn test_scores_are_drawn() {
        let mut state = playing_state();
        state.score = 30;
        let frame = render(&state);

        assert!(frame.contains("Score: 30"));
        assert!(frame.contains("High Score: 60"));
        assert!(!frame.contains("GAME OVER"));
    }

    #[test]
    fn test_snake_and_food_are_drawn() {
        let frame = render(&playing_state());

        assert!(frame.contains(" ▶"));
        assert!(frame.contains("● "));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = playing_state();
        state.score = 20;
        state.game_over = true;
        let frame = render(&state);

        assert!(frame.contains("GAME OVER"));
        assert!(frame.contains("Press SPACE to restart"));
        assert!(frame.contains("Score: 20"));
    }

    #[test]
    fn test_win_overlay() {
        let mut state = playing_state();
        state.game_over = true;
        state.won = true;
        state.food = None;
        let frame = render(&state);

        assert!(frame.contains("YOU WIN"));
        assert!(!frame.contains("● "));
    }

    #[test]
    fn test_screen_position() {
        assert_eq!(screen_position(Cell::new(0, 0)), (1, 3));
        assert_eq!(screen_position(Cell::new(200, 200)), (21, 13));
        assert_eq!(head_glyph(Direction::Up), "▲ ");
    }
}
