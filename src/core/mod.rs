//! Core module - pure game logic
//!
//! Game rules, state management and logic; no UI, networking or I/O.

pub mod board;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use board::Board;
pub use rng::{PieceSequencer, SimpleRng};
pub use session::{ActivePiece, GameSession, LockEvent};
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
