//! Core types shared across the engine
//!
//! Pure data types and the fixed numeric tables (board geometry, timing,
//! scoring). Everything here is constant configuration; runtime state lives
//! in `core`.

use serde::{Deserialize, Serialize};

/// Board dimensions. Rows 0..BUFFER_ROWS are a hidden spawn/overflow buffer;
/// rows BUFFER_ROWS..BOARD_HEIGHT are the visible play area.
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 22;
pub const BUFFER_ROWS: u8 = 2;

/// Spawn position for the 4x4 bounding box of a new piece.
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = 0;

/// Number of look-ahead entries in the piece queue.
pub const QUEUE_LEN: usize = 3;

/// Gravity timing (milliseconds).
pub const INITIAL_GRAVITY_MS: u32 = 500;
pub const GRAVITY_STEP_MS: u32 = 50;
pub const GRAVITY_FLOOR_MS: u32 = 100;

/// Level progression.
pub const MAX_LEVEL: u32 = 10;
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per number of rows cleared in a single lock (index = rows).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 600, 1000];

/// Tetromino shapes. The discriminant doubles as the color/index key stored
/// in board cells, so `Empty` is a real variant rather than an `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Shape {
    Empty = 0,
    Z = 1,
    S = 2,
    J = 3,
    O = 4,
    T = 5,
    I = 6,
    L = 7,
}

/// The 7 playable shapes, in discriminant order.
pub const PIECES: [Shape; 7] = [
    Shape::Z,
    Shape::S,
    Shape::J,
    Shape::O,
    Shape::T,
    Shape::I,
    Shape::L,
];

impl Shape {
    /// Color/index key written into board cells.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn is_empty(self) -> bool {
        self == Shape::Empty
    }

    /// Which SRS kick table this shape uses.
    pub fn kick_class(self) -> KickClass {
        match self {
            Shape::I => KickClass::I,
            Shape::O | Shape::Empty => KickClass::O,
            Shape::Z | Shape::S | Shape::J | Shape::T | Shape::L => KickClass::Jlstz,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Shape::Empty),
            1 => Some(Shape::Z),
            2 => Some(Shape::S),
            3 => Some(Shape::J),
            4 => Some(Shape::O),
            5 => Some(Shape::T),
            6 => Some(Shape::I),
            7 => Some(Shape::L),
            _ => None,
        }
    }
}

/// SRS wall-kick classes. JLSTZ shapes share one table, I has its own, and O
/// rotates in place (identity offset only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickClass {
    Jlstz,
    I,
    O,
}

/// Rotation states (North = spawn orientation), clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise: (o + 1) mod 4.
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise: (o + 3) mod 4.
    pub fn rotate_ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Clockwise rotation count from spawn, in {0,1,2,3}.
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Rotation direction for the rotate commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Cw,
    Ccw,
}

/// Player/driver commands accepted by the session. This is the complete
/// command surface; presentation layers translate raw input into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Hold,
    Pause,
    Start,
}
