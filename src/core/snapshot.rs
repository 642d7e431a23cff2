//! Read-only session snapshot for presentation layers
//!
//! The engine never pushes frames; renderers and adapters pull one of these
//! after a command or tick. Serializable so out-of-process observers can
//! consume the same view.

use serde::{Deserialize, Serialize};

use crate::core::session::ActivePiece;
use crate::types::{Rotation, Shape, BOARD_HEIGHT, BOARD_WIDTH, QUEUE_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub rotation: Rotation,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(piece: ActivePiece) -> Self {
        Self {
            shape: piece.shape,
            x: piece.x,
            y: piece.y,
            rotation: piece.rotation,
        }
    }
}

/// Everything a renderer needs, in one flat value. The board is exported as
/// raw index keys (buffer rows included; presentation decides what to show).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Hard-drop landing row of the active piece (ghost piece).
    pub ghost_row: Option<i8>,
    pub queue: [Shape; QUEUE_LEN],
    pub hold: Shape,
    pub can_swap: bool,
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub gravity_interval_ms: u32,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
    pub seed: u32,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_row: None,
            queue: [Shape::Empty; QUEUE_LEN],
            hold: Shape::Empty,
            can_swap: true,
            score: 0,
            level: 1,
            lines_cleared: 0,
            gravity_interval_ms: 0,
            started: false,
            paused: false,
            game_over: false,
            seed: 0,
        }
    }
}
