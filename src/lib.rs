//! Falling-block puzzle engine
//!
//! Owns board state, active/queued/held pieces, SRS movement and rotation
//! legality, line clears, scoring and difficulty progression. Driven from
//! outside by gravity ticks and player commands; presentation layers read
//! state snapshots and never reach into engine internals.

pub mod core;
pub mod types;

pub use crate::core::{
    ActivePiece, ActiveSnapshot, Board, GameSession, LockEvent, PieceSequencer, SessionSnapshot,
};
pub use crate::types::{Command, Rotation, Shape, Spin};
