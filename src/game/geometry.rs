use super::direction::Direction;

/// Side length of one grid cell in playfield units
pub const CELL_SIZE: i32 = 20;

pub const DEFAULT_COLS: u16 = 20;
pub const DEFAULT_ROWS: u16 = 20;

/// A grid-aligned position; both coordinates are multiples of `CELL_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one grid step away in `direction`
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * CELL_SIZE,
            y: self.y + dy * CELL_SIZE,
        }
    }

    pub fn column(self) -> i32 {
        self.x / CELL_SIZE
    }

    pub fn row(self) -> i32 {
        self.y / CELL_SIZE
    }
}

/// Playfield bounds, measured in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cols: u16,
    rows: u16,
}

impl Grid {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Playfield width in units; valid x lies in `[0, width)`
    pub fn width(&self) -> i32 {
        i32::from(self.cols) * CELL_SIZE
    }

    /// Playfield height in units; valid y lies in `[0, height)`
    pub fn height(&self) -> i32 {
        i32::from(self.rows) * CELL_SIZE
    }

    pub fn cell_count(&self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width() && cell.y >= 0 && cell.y < self.height()
    }

    pub fn cell_at(&self, col: u16, row: u16) -> Cell {
        Cell::new(i32::from(col) * CELL_SIZE, i32::from(row) * CELL_SIZE)
    }

    /// Starting cell of every new game: the centre of the playfield, snapped to the grid
    pub fn origin(&self) -> Cell {
        self.cell_at(self.cols / 2, self.rows / 2)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}
