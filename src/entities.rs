//! Entities that occupy the board: pure data, no game rules.

pub const FLOOR_GLYPH: char = ' ';
pub const PLAYER_GLYPH: char = '@';
pub const ENEMY_GLYPH: char = 'm';
pub const ARROW_VERTICAL_GLYPH: char = '!';
pub const ARROW_HORIZONTAL_GLYPH: char = '-';

// ── Coordinates ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Position {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Chebyshev distance: diagonal neighbours are 1 apart.
    pub fn chebyshev(self, other: Position) -> i32 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }
}

/// One of the four cardinal directions, used for both moving and aiming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(row, col)` delta of a single step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub pos: Position,
    /// Turns until the bow is drawn again: 0 ready, `reload_time` just fired.
    pub reload: u8,
}

impl Player {
    pub const fn new(pos: Position) -> Self {
        Player { pos, reload: 0 }
    }

    pub const fn is_ready(&self) -> bool {
        self.reload == 0
    }
}

/// Stable handle for a live enemy; never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub u32);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub id: EnemyId,
    pub pos: Position,
    /// Whether the last pursuit attempt this turn moved the enemy.
    pub moved: bool,
}

// ── Projectile ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrow {
    pub pos: Position,
    pub dr: i32,
    pub dc: i32,
    pub flying: bool,
    /// Kills made during this flight; the next one is worth `2^combo`.
    pub combo: u32,
}

impl Arrow {
    /// A fresh arrow leaving `pos`, already in flight.
    pub const fn loosed(pos: Position, dr: i32, dc: i32) -> Self {
        Arrow {
            pos,
            dr,
            dc,
            flying: true,
            combo: 0,
        }
    }

    pub const fn is_vertical(&self) -> bool {
        self.dc == 0
    }
}
