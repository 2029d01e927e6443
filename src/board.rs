//! The fixed-size grid.
//!
//! Every cell always holds exactly one `Cell`; floor is a variant, not an
//! absence. The board stores back-references only (`EnemyId`), the entities
//! themselves live in the `Session`.

use crate::entities::{
    EnemyId, Position, ARROW_HORIZONTAL_GLYPH, ARROW_VERTICAL_GLYPH, ENEMY_GLYPH, FLOOR_GLYPH,
    PLAYER_GLYPH,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Floor,
    Player,
    Enemy(EnemyId),
    Arrow { vertical: bool },
}

impl Cell {
    pub const fn glyph(self) -> char {
        match self {
            Cell::Floor => FLOOR_GLYPH,
            Cell::Player => PLAYER_GLYPH,
            Cell::Enemy(_) => ENEMY_GLYPH,
            Cell::Arrow { vertical: true } => ARROW_VERTICAL_GLYPH,
            Cell::Arrow { vertical: false } => ARROW_HORIZONTAL_GLYPH,
        }
    }

    pub const fn is_floor(self) -> bool {
        matches!(self, Cell::Floor)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

impl Board {
    /// An all-floor board. Dimensions are clamped to at least 1×1.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Board {
            rows,
            cols,
            cells: vec![Cell::Floor; (rows * cols) as usize],
        }
    }

    pub const fn rows(&self) -> i32 {
        self.rows
    }

    pub const fn cols(&self) -> i32 {
        self.cols
    }

    pub const fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| (pos.row * self.cols + pos.col) as usize)
    }

    /// Overwrite every cell with floor.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Floor);
    }

    /// Stamp `cell` at `pos`; the last writer wins. Off-board positions are ignored.
    pub fn place(&mut self, pos: Position, cell: Cell) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = cell;
        }
    }

    /// The cell at `pos`, or `None` off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub fn is_floor(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_floor)
    }

    /// Shared movement primitive: move `pos` by `(dr, dc)` and stamp `cell`
    /// there. Returns `false` without touching anything when the destination
    /// is off the board. Occupancy rules belong to the caller.
    pub fn try_step(&mut self, pos: &mut Position, dr: i32, dc: i32, cell: Cell) -> bool {
        let dest = pos.offset(dr, dc);
        if !self.in_bounds(dest) {
            return false;
        }
        *pos = dest;
        self.place(dest, cell);
        true
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: i32) -> &[Cell] {
        if row < 0 || row >= self.rows {
            return &[];
        }
        let start = (row * self.cols) as usize;
        &self.cells[start..start + self.cols as usize]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether `pos` lies on the outermost ring of cells.
    pub const fn on_perimeter(&self, pos: Position) -> bool {
        self.in_bounds(pos)
            && (pos.row == 0 || pos.row == self.rows - 1 || pos.col == 0 || pos.col == self.cols - 1)
    }
}
