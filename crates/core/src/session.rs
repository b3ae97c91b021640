//! Session module - one game from spawn to game over
//!
//! A [`Session`] owns the board, the active piece, the spawn RNG and the score.
//! It has no clock: the embedder calls [`Session::tick`] at whatever period it
//! likes (see [`SessionConfig::gravity_ms`]) and forwards player input as
//! discrete commands. Every operation runs to completion and never fails; a
//! rejected move just returns `false`.
//!
//! While the session is over, every command except [`Session::reset`] is a
//! no-op.

use log::{debug, info, trace};

use crate::board::Board;
use crate::config::SessionConfig;
use crate::piece::Tetromino;
use crate::rng::PieceRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, RotateDirection};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    /// `None` only once the game is over
    active: Option<Tetromino>,
    rng: PieceRng,
    /// One point per cleared line
    score: u32,
    lines: u32,
    pieces_locked: u32,
    game_over: bool,
}

impl Session {
    /// Start a new game: empty board, first piece already spawned
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self::empty(config, Board::new());
        session.spawn_piece();
        session
    }

    /// Start a new game with a fixed piece sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SessionConfig::with_seed(seed))
    }

    /// Resume from an explicit board and active piece.
    ///
    /// Nothing is drawn from the RNG, so the first spawn after `piece` locks
    /// is the first piece of the seeded sequence. If `piece` does not fit,
    /// the session starts out over with no active piece.
    pub fn from_parts(config: SessionConfig, board: Board, piece: Tetromino) -> Self {
        let mut session = Self::empty(config, board);
        if piece.fits(&session.board) {
            session.active = Some(piece);
        } else {
            session.end_game();
        }
        session
    }

    fn empty(config: SessionConfig, board: Board) -> Self {
        let rng = match config.seed {
            Some(seed) => PieceRng::new(seed),
            None => PieceRng::from_entropy(),
        };
        Self {
            config,
            board,
            active: None,
            rng,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            game_over: false,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Spawn a random piece at the spawn anchor.
    ///
    /// Ends the game if the new piece already collides with the stack.
    fn spawn_piece(&mut self) -> bool {
        let piece = Tetromino::new(self.rng.draw());

        if !piece.fits(&self.board) {
            debug!("spawn of {} blocked", piece.kind.as_str());
            self.end_game();
            return false;
        }

        debug!("spawned {} at ({}, {})", piece.kind.as_str(), piece.x, piece.y);
        self.active = Some(piece);
        true
    }

    fn end_game(&mut self) {
        self.game_over = true;
        self.active = None;
        info!(
            "game over: score {} after {} pieces",
            self.score, self.pieces_locked
        );
    }

    /// Commit the active piece to the board, clear lines, then spawn or end.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.lock_cells(&active.cells(), active.kind);
        self.pieces_locked += 1;

        let cleared = self.board.clear_full_lines();
        self.score += cleared;
        self.lines += cleared;
        debug!(
            "locked {} at ({}, {}), cleared {}",
            active.kind.as_str(),
            active.x,
            active.y,
            cleared
        );

        // Checked on the board after clearing: material that a clear shifts
        // out of row 0 does not end the game.
        if self.board.top_row_has_any_filled() {
            self.end_game();
            return;
        }

        self.spawn_piece();
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match active.try_move(&self.board, dx, dy) {
            Some(moved) => {
                self.active = Some(moved);
                true
            }
            None => false,
        }
    }

    fn try_rotate(&mut self, direction: RotateDirection) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match active.try_rotate(&self.board, direction) {
            Some(rotated) => {
                self.active = Some(rotated);
                true
            }
            None => false,
        }
    }

    /// One gravity step: fall a row, or lock if the piece is resting.
    ///
    /// Returns true if the piece locked.
    pub fn tick(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if self.try_move(0, 1) {
            trace!("gravity");
            return false;
        }
        self.lock_piece();
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Move down one row without ever locking
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.try_rotate(RotateDirection::Cw)
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.try_rotate(RotateDirection::Ccw)
    }

    /// Drop the active piece to its landing row and lock it immediately
    pub fn hard_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        self.active = Some(active.hard_drop(&self.board));
        self.lock_piece();
        true
    }

    /// Empty board, zero score, fresh piece. Works from any state.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.game_over = false;
        self.active = None;
        debug!("reset");
        self.spawn_piece();
    }

    /// Apply a single command, returning whether it changed anything
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => self.hard_drop(),
            Command::RotateCw => self.rotate_cw(),
            Command::RotateCcw => self.rotate_ccw(),
            Command::Tick => {
                if self.game_over {
                    return false;
                }
                self.tick();
                true
            }
            Command::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Where the active piece would land on a hard drop
    pub fn ghost(&self) -> Option<Tetromino> {
        self.active.map(|piece| piece.hard_drop(&self.board))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (dst, src) in out.cells.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(src);
        }

        out.active = self.active.map(ActiveSnapshot::from);
        out.active_cells = self
            .active
            .map(|p| p.visible_cells())
            .unwrap_or_default();
        out.ghost_cells = self
            .ghost()
            .map(|p| p.visible_cells())
            .unwrap_or_default();
        out.score = self.score;
        out.lines = self.lines;
        out.pieces_locked = self.pieces_locked;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
