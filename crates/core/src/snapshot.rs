use arrayvec::ArrayVec;
use serde::Serialize;

use crate::piece::Tetromino;
use crate::types::{Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

pub type CellGrid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view of a session for renderers.
///
/// `active_cells` and `ghost_cells` only list cells inside the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub cells: CellGrid,
    pub active: Option<ActiveSnapshot>,
    pub active_cells: ArrayVec<(i8, i8), 4>,
    pub ghost_cells: ArrayVec<(i8, i8), 4>,
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.active_cells.clear();
        self.ghost_cells.clear();
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.game_over = false;
    }

    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.is_filled())
            .count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            active_cells: ArrayVec::new(),
            ghost_cells: ArrayVec::new(),
            score: 0,
            lines: 0,
            pieces_locked: 0,
            game_over: false,
        }
    }
}
