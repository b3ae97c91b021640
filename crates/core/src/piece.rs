//! Active piece module - the falling tetromino and its movement rules
//!
//! All operations here are pure queries against a [`Board`]: they return a
//! candidate piece or nothing, and never touch the board. Locking is the
//! session's job.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::{get_shape, kick_offsets, spawn_width, PieceShape};
use crate::types::{PieceKind, RotateDirection, Rotation, BOARD_WIDTH, SPAWN_ROW};

/// Absolute board cells of a piece
pub type PieceCells = [(i8, i8); 4];

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Anchor column (left edge of the bounding box)
    pub x: i8,
    /// Anchor row (top edge of the bounding box)
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at its spawn anchor: centered, on the spawn row
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: BOARD_WIDTH as i8 / 2 - spawn_width(kind) / 2,
            y: SPAWN_ROW,
        }
    }

    /// Place a piece at an explicit anchor and rotation
    pub fn at(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute cells: anchor plus every offset of the current rotation
    pub fn cells(&self) -> PieceCells {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// True if no cell of the piece is blocked on `board`
    pub fn fits(&self, board: &Board) -> bool {
        self.cells().iter().all(|&(x, y)| !board.is_blocked(x, y))
    }

    /// Same piece shifted by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Translate by (dx, dy); `None` if the result collides
    pub fn try_move(&self, board: &Board, dx: i8, dy: i8) -> Option<Self> {
        let candidate = self.shifted(dx, dy);
        candidate.fits(board).then_some(candidate)
    }

    /// Rotate one step, trying the kind's kick offsets in order.
    ///
    /// The first offset that fits wins. If none fit, returns `None` and the
    /// caller keeps the original piece untouched.
    pub fn try_rotate(&self, board: &Board, direction: RotateDirection) -> Option<Self> {
        let rotated = Self {
            rotation: self.rotation.rotate(direction),
            ..*self
        };

        kick_offsets(self.kind)
            .iter()
            .map(|&(dx, dy)| rotated.shifted(dx, dy))
            .find(|candidate| candidate.fits(board))
    }

    /// Lowest reachable position straight down (the piece itself if it cannot fall)
    pub fn hard_drop(&self, board: &Board) -> Self {
        let mut piece = *self;
        while let Some(next) = piece.try_move(board, 0, 1) {
            piece = next;
        }
        piece
    }

    /// True if the piece cannot fall any further
    pub fn is_grounded(&self, board: &Board) -> bool {
        self.try_move(board, 0, 1).is_none()
    }

    /// Cells of the piece that are inside the board, for renderers
    pub fn visible_cells(&self) -> ArrayVec<(i8, i8), 4> {
        self.cells().into_iter().filter(|&(_, y)| y >= 0).collect()
    }
}
