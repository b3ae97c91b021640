//! Pieces module - tetromino catalog and rotation kick tables
//!
//! Every kind has exactly four rotation states, each a set of four cell
//! offsets inside the kind's bounding box. Offsets are `(dx, dy)` with `dy`
//! growing downward, matching board rows.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to the piece anchor (top-left of its box)
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// Rotation states of one kind, indexed by [`Rotation::index`]
pub type RotationStates = [PieceShape; 4];

const I_STATES: RotationStates = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

const O_STATES: RotationStates = [[(0, 0), (1, 0), (0, 1), (1, 1)]; 4];

const T_STATES: RotationStates = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (0, 1), (1, 1), (0, 2)],
    [(0, 0), (1, 0), (2, 0), (1, 1)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

// S and Z only have two distinct orientations; states 2 and 3 repeat 0 and 1.
const S_STATES: RotationStates = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_STATES: RotationStates = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

const J_STATES: RotationStates = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (1, 0), (0, 1), (0, 2)],
    [(0, 0), (1, 0), (2, 0), (2, 1)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_STATES: RotationStates = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (2, 0), (0, 1)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

/// All four rotation states of a kind
pub fn rotation_states(kind: PieceKind) -> &'static RotationStates {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    rotation_states(kind)[rotation.index()]
}

/// Width of the spawn-orientation bounding box, used to center new pieces
pub fn spawn_width(kind: PieceKind) -> i8 {
    match kind {
        PieceKind::I => 4,
        PieceKind::O => 2,
        _ => 3,
    }
}

/// Kick offsets tried in order when the I piece rotates
const I_KICKS: [MinoOffset; 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Every other kind only tries the in-place rotation
const NO_KICKS: [MinoOffset; 1] = [(0, 0)];

/// Kick offsets to try, in order, for a rotation of `kind`
///
/// Only the I piece gets alternatives; for the rest a blocked in-place
/// rotation simply fails. The first offset is always `(0, 0)`.
pub fn kick_offsets(kind: PieceKind) -> &'static [MinoOffset] {
    match kind {
        PieceKind::I => &I_KICKS,
        _ => &NO_KICKS,
    }
}
