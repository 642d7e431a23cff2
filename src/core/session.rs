//! Game session - the engine's state machine
//!
//! Ties the board, shape catalog, sequencer and scoring together: spawn,
//! gravity, player commands, hold slot, lock-in, scoring and game-over
//! detection. The session is driven cooperatively from outside — gravity
//! ticks and commands must arrive on one execution context — and every
//! operation is a finite computation that either commits or leaves state
//! untouched.

use crate::core::snapshot::{ActiveSnapshot, SessionSnapshot};
use crate::core::{pieces, scoring, Board, PieceSequencer};
use crate::types::{Command, Rotation, Shape, Spin, BUFFER_ROWS, INITIAL_GRAVITY_MS, SPAWN_X, SPAWN_Y};

/// Active falling piece: shape plus the board offset of its 4x4 bounding box
/// and its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub rotation: Rotation,
}

impl ActivePiece {
    /// A freshly spawned piece at the spawn position and orientation.
    pub fn spawn(shape: Shape) -> Self {
        Self {
            shape,
            x: SPAWN_X,
            y: SPAWN_Y,
            rotation: Rotation::North,
        }
    }

    pub fn fits(&self, board: &Board) -> bool {
        board.placement_fits(self.shape, self.rotation, self.x, self.y)
    }
}

/// Record of the most recent lock-in, consumed once by the presentation
/// layer. Its presence is the cosmetic "piece landed" trigger;
/// `new_gravity_interval_ms` is the explicit reschedule effect for the
/// external gravity clock when the level changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub new_gravity_interval_ms: Option<u32>,
    pub game_over: bool,
}

/// Complete game state. `NotStarted -> Running <-> Paused`; a blocked spawn
/// moves `Running -> GameOver` (started drops back to false) until `start`
/// resets everything.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<ActivePiece>,
    sequencer: PieceSequencer,
    hold: Shape,
    swapped_this_drop: bool,
    score: u32,
    level: u32,
    lines_cleared: u32,
    gravity_interval_ms: u32,
    started: bool,
    paused: bool,
    game_over: bool,
    last_event: Option<LockEvent>,
}

impl GameSession {
    /// Create a session with the given RNG seed. Nothing runs until `start`.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            sequencer: PieceSequencer::new(seed),
            hold: Shape::Empty,
            swapped_this_drop: false,
            score: 0,
            level: 1,
            lines_cleared: 0,
            gravity_interval_ms: INITIAL_GRAVITY_MS,
            started: false,
            paused: false,
            game_over: false,
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn hold_shape(&self) -> Shape {
        self.hold
    }

    /// Upcoming shapes, front first.
    pub fn preview(&self) -> &[Shape; crate::types::QUEUE_LEN] {
        self.sequencer.preview()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Current gravity interval for the external clock.
    pub fn gravity_interval_ms(&self) -> u32 {
        self.gravity_interval_ms
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether `hold` would be accepted for the current drop.
    pub fn can_swap(&self) -> bool {
        !self.swapped_this_drop
    }

    fn running(&self) -> bool {
        self.started && !self.paused
    }

    /// Start or restart the game. From Paused this only resumes; otherwise
    /// the board, counters, queue and hold slot are fully reset and a fresh
    /// piece spawns.
    pub fn start(&mut self) {
        if self.started && self.paused {
            self.paused = false;
            return;
        }

        self.board.clear();
        self.score = 0;
        self.level = 1;
        self.lines_cleared = 0;
        self.gravity_interval_ms = INITIAL_GRAVITY_MS;
        let shape = self.sequencer.fresh_shape();
        self.sequencer.reseed_queue();
        self.active = Some(ActivePiece::spawn(shape));
        self.hold = Shape::Empty;
        self.swapped_this_drop = false;
        self.last_event = None;
        self.game_over = false;
        self.paused = false;
        self.started = true;
    }

    /// Toggle Running <-> Paused. No-op when not started (including after
    /// game over).
    pub fn pause(&mut self) {
        if !self.started {
            return;
        }
        self.paused = !self.paused;
    }

    /// Translate the active piece without legality re-checks at the call
    /// site; commits only when the target position fits.
    fn shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        if self
            .board
            .placement_fits(piece.shape, piece.rotation, piece.x + dx, piece.y + dy)
        {
            self.active = Some(ActivePiece {
                x: piece.x + dx,
                y: piece.y + dy,
                ..piece
            });
            return true;
        }

        false
    }

    /// Horizontal move; `dx` is -1 or +1 from the command surface.
    pub fn move_by(&mut self, dx: i8) -> bool {
        if !self.running() {
            return false;
        }
        self.shift(dx, 0)
    }

    /// One-cell descent.
    pub fn soft_drop(&mut self) -> bool {
        if !self.running() {
            return false;
        }
        self.shift(0, 1)
    }

    /// SRS rotation with wall kicks; all-or-nothing.
    pub fn rotate(&mut self, spin: Spin) -> bool {
        if !self.running() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        let board = &self.board;
        let result = pieces::attempt_rotate(
            piece.shape,
            piece.rotation,
            piece.x,
            piece.y,
            spin,
            |shape, rotation, x, y| board.placement_fits(shape, rotation, x, y),
        );

        if let Some((rotation, (dx, dy))) = result {
            self.active = Some(ActivePiece {
                rotation,
                x: piece.x + dx,
                y: piece.y + dy,
                ..piece
            });
            return true;
        }

        false
    }

    /// Drop to the lowest legal position and lock immediately; no gravity
    /// tick is needed to finish the drop.
    pub fn hard_drop(&mut self) -> bool {
        if !self.running() || self.active.is_none() {
            return false;
        }

        while self.shift(0, 1) {}
        self.lock_active();
        true
    }

    /// Store or exchange the active shape. Allowed once per drop; the block
    /// lifts at the next post-lock spawn. An unplaceable replacement piece
    /// ends the session (same rule as a blocked spawn).
    pub fn hold(&mut self) -> bool {
        if !self.running() || self.swapped_this_drop {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        let replacement = if self.hold.is_empty() {
            self.sequencer.next_from_queue()
        } else {
            self.hold
        };
        // Orientation resets on store; the held shape respawns at North.
        self.hold = piece.shape;

        let next = ActivePiece::spawn(replacement);
        if !next.fits(&self.board) {
            self.active = None;
            self.started = false;
            self.game_over = true;
            return true;
        }

        self.active = Some(next);
        self.swapped_this_drop = true;
        true
    }

    /// Gravity tick from the external clock: one descent step, locking the
    /// piece when it can no longer descend. Returns true while the piece
    /// moved; false means the tick locked the piece or was ignored.
    pub fn on_gravity_tick(&mut self) -> bool {
        if !self.running() || self.active.is_none() {
            return false;
        }

        if self.shift(0, 1) {
            return true;
        }
        self.lock_active();
        false
    }

    /// Lock-in pipeline: merge the piece into the board, clear full rows and
    /// score them, advance level/gravity, then spawn the next piece from the
    /// queue. A spawn that does not fit, or an occupied topmost playable
    /// row, ends the session.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board
            .lock_piece(piece.shape, piece.rotation, piece.x, piece.y);

        let cleared = self.board.clear_full_rows();
        let lines = cleared.len();
        self.score += scoring::score_for_clear(lines);
        self.lines_cleared += lines as u32;

        let mut new_interval = None;
        let level = scoring::level_for_lines(self.lines_cleared);
        if level > self.level {
            self.level = level;
            self.gravity_interval_ms = scoring::gravity_interval_ms(level);
            new_interval = Some(self.gravity_interval_ms);
        }

        let next = ActivePiece::spawn(self.sequencer.next_from_queue());
        let blocked =
            !next.fits(&self.board) || self.board.is_row_occupied(BUFFER_ROWS as usize);
        if blocked {
            self.started = false;
            self.game_over = true;
        } else {
            self.active = Some(next);
            // The once-per-drop swap block lifts only at this normal
            // post-lock spawn.
            self.swapped_this_drop = false;
        }

        self.last_event = Some(LockEvent {
            lines_cleared: lines as u32,
            new_gravity_interval_ms: new_interval,
            game_over: blocked,
        });
    }

    /// Row the active piece would occupy after a hard drop. Computed from
    /// the same collision rule as movement; never mutates state.
    pub fn ghost_row(&self) -> Option<i8> {
        let piece = self.active?;
        let mut y = piece.y;
        while self
            .board
            .placement_fits(piece.shape, piece.rotation, piece.x, y + 1)
        {
            y += 1;
        }
        Some(y)
    }

    /// Take and clear the most recent lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Dispatch a command from the presentation layer.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_by(-1),
            Command::MoveRight => self.move_by(1),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => self.hard_drop(),
            Command::RotateCw => self.rotate(Spin::Cw),
            Command::RotateCcw => self.rotate(Spin::Ccw),
            Command::Hold => self.hold(),
            Command::Pause => {
                let before = self.paused;
                self.pause();
                self.paused != before
            }
            Command::Start => {
                self.start();
                true
            }
        }
    }

    /// Fill a snapshot buffer without allocating.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_row = self.ghost_row();
        out.queue = *self.sequencer.preview();
        out.hold = self.hold;
        out.can_swap = !self.swapped_this_drop;
        out.score = self.score;
        out.level = self.level;
        out.lines_cleared = self.lines_cleared;
        out.gravity_interval_ms = self.gravity_interval_ms;
        out.started = self.started;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.seed = self.sequencer.state();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snapshot = SessionSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
