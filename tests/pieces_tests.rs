//! Pieces tests - catalog, movement and rotation with kicks

use blocktris::core::pieces::{get_shape, kick_offsets, rotation_states, spawn_width};
use blocktris::core::{Board, Session, SessionConfig, Tetromino};
use blocktris::types::{Cell, PieceKind, RotateDirection, Rotation, BOARD_HEIGHT};

// ============== Catalog ==============

#[test]
fn test_i_piece_shapes() {
    assert_eq!(
        get_shape(PieceKind::I, Rotation::North),
        [(0, 1), (1, 1), (2, 1), (3, 1)]
    );
    assert_eq!(
        get_shape(PieceKind::I, Rotation::East),
        [(2, 0), (2, 1), (2, 2), (2, 3)]
    );
    assert_eq!(
        get_shape(PieceKind::I, Rotation::South),
        [(0, 2), (1, 2), (2, 2), (3, 2)]
    );
    assert_eq!(
        get_shape(PieceKind::I, Rotation::West),
        [(1, 0), (1, 1), (1, 2), (1, 3)]
    );
}

#[test]
fn test_o_piece_states_identical() {
    let states = rotation_states(PieceKind::O);
    assert!(states.iter().all(|s| *s == states[0]));
    assert_eq!(states[0], [(0, 0), (1, 0), (0, 1), (1, 1)]);
}

#[test]
fn test_t_piece_rotates_clockwise() {
    // Nub points up, right, down, left
    assert!(get_shape(PieceKind::T, Rotation::North).contains(&(1, 0)));
    assert!(get_shape(PieceKind::T, Rotation::East).contains(&(1, 1)));
    assert_eq!(
        get_shape(PieceKind::T, Rotation::South),
        [(0, 0), (1, 0), (2, 0), (1, 1)]
    );
    assert_eq!(
        get_shape(PieceKind::T, Rotation::West),
        [(1, 0), (0, 1), (1, 1), (1, 2)]
    );
}

#[test]
fn test_s_and_z_have_two_orientations() {
    for kind in [PieceKind::S, PieceKind::Z] {
        let states = rotation_states(kind);
        assert_eq!(states[0], states[2]);
        assert_eq!(states[1], states[3]);
        assert_ne!(states[0], states[1]);
    }
}

#[test]
fn test_spawn_widths() {
    assert_eq!(spawn_width(PieceKind::I), 4);
    assert_eq!(spawn_width(PieceKind::O), 2);
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(spawn_width(kind), 3);
    }
}

#[test]
fn test_i_kick_order() {
    assert_eq!(
        kick_offsets(PieceKind::I),
        &[(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)]
    );
}

// ============== Movement ==============

#[test]
fn test_try_move_blocked_by_stack() {
    let mut board = Board::new();
    board.set(4, 2, Cell::Filled(PieceKind::Z));

    let piece = Tetromino::new(PieceKind::O);
    assert!(piece.try_move(&board, 0, 1).is_none());
    assert!(piece.try_move(&board, -1, 0).is_some());
}

#[test]
fn test_try_move_never_leaves_board() {
    let board = Board::new();
    let mut piece = Tetromino::new(PieceKind::I);
    while let Some(next) = piece.try_move(&board, 1, 0) {
        piece = next;
    }
    assert_eq!(piece.cells().iter().map(|c| c.0).max(), Some(9));
}

#[test]
fn test_hard_drop_stops_on_stack() {
    let board = Board::from_rows(&["....#.....", "....#....."]);
    let landed = Tetromino::new(PieceKind::O).hard_drop(&board);
    assert_eq!(landed.y, BOARD_HEIGHT as i8 - 4);
    assert_eq!(landed.x, 4);
}

#[test]
fn test_hard_drop_is_pure() {
    let board = Board::new();
    let piece = Tetromino::new(PieceKind::L);
    let _ = piece.hard_drop(&board);
    assert_eq!(board.filled_count(), 0);
}

// ============== Rotation ==============

#[test]
fn test_four_rotations_return_home() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        for direction in [RotateDirection::Cw, RotateDirection::Ccw] {
            let start = Tetromino::at(kind, Rotation::North, 4, 8);
            let mut piece = start;
            for _ in 0..4 {
                piece = piece.try_rotate(&board, direction).unwrap();
            }
            assert_eq!(piece, start, "{kind:?} {direction:?}");
        }
    }
}

#[test]
fn test_o_rotation_changes_only_index() {
    let board = Board::new();
    let piece = Tetromino::new(PieceKind::O);
    let rotated = piece.try_rotate(&board, RotateDirection::Cw).unwrap();
    assert_eq!(rotated.rotation, Rotation::East);
    assert_eq!(rotated.cells(), piece.cells());
}

#[test]
fn test_i_kicks_off_left_wall() {
    let board = Board::new();
    // West state at anchor -1 puts the bar in column 0
    let piece = Tetromino::at(PieceKind::I, Rotation::West, -1, 5);
    assert!(piece.fits(&board));

    // In place the horizontal bar would need column -1; the (1, 0) kick fits
    let rotated = piece.try_rotate(&board, RotateDirection::Cw).unwrap();
    assert_eq!(rotated.rotation, Rotation::North);
    assert_eq!((rotated.x, rotated.y), (0, 5));
    assert!(rotated.cells().iter().all(|&(x, _)| x >= 0));
}

#[test]
fn test_spawned_i_rotates_in_place_at_left_wall() {
    let board = Board::new();
    let mut piece = Tetromino::new(PieceKind::I);
    while let Some(next) = piece.try_move(&board, -1, 0) {
        piece = next;
    }
    assert_eq!((piece.x, piece.y), (0, 0));
    assert_eq!(piece.cells(), [(0, 1), (1, 1), (2, 1), (3, 1)]);

    // Both vertical states sit inside columns 0-3, so the (0, 0) offset wins
    let cw = piece.try_rotate(&board, RotateDirection::Cw).unwrap();
    assert_eq!((cw.rotation, cw.x, cw.y), (Rotation::East, 0, 0));
    assert_eq!(cw.cells(), [(2, 0), (2, 1), (2, 2), (2, 3)]);

    let ccw = piece.try_rotate(&board, RotateDirection::Ccw).unwrap();
    assert_eq!((ccw.rotation, ccw.x, ccw.y), (Rotation::West, 0, 0));
    assert_eq!(ccw.cells(), [(1, 0), (1, 1), (1, 2), (1, 3)]);

    // Same through the session commands
    for clockwise in [true, false] {
        let config = SessionConfig::with_seed(1);
        let mut session = Session::from_parts(config, Board::new(), Tetromino::new(PieceKind::I));
        while session.move_left() {}
        assert_eq!(session.active().map(|p| p.x), Some(0));
        let rotated = if clockwise { session.rotate_cw() } else { session.rotate_ccw() };
        assert!(rotated);
        assert_eq!(session.active().map(|p| (p.x, p.y)), Some((0, 0)));
    }
}

#[test]
fn test_i_kicks_up_from_floor() {
    let board = Board::from_rows(&["##########"]);
    // South state: bar on the anchor's third row, resting on the full row
    let piece = Tetromino::at(PieceKind::I, Rotation::South, 3, BOARD_HEIGHT as i8 - 4);
    assert!(piece.fits(&board));

    // East state reaches four rows down into the filled row; sideways kicks
    // keep that depth, so only the upward kick works.
    let rotated = piece.try_rotate(&board, RotateDirection::Ccw).unwrap();
    assert_eq!(rotated.rotation, Rotation::East);
    assert_eq!((rotated.x, rotated.y), (3, BOARD_HEIGHT as i8 - 5));
}

#[test]
fn test_i_rotation_fails_when_every_kick_blocked() {
    // Vertical I in a one-wide well
    let board = Board::from_rows(&[
        "###.######",
        "###.######",
        "###.######",
        "###.######",
        "###.######",
        "###.######",
    ]);
    let piece = Tetromino::at(PieceKind::I, Rotation::West, 2, BOARD_HEIGHT as i8 - 4);
    assert!(piece.fits(&board));
    assert!(piece.try_rotate(&board, RotateDirection::Cw).is_none());
    assert!(piece.try_rotate(&board, RotateDirection::Ccw).is_none());
}

#[test]
fn test_non_i_piece_does_not_kick() {
    let board = Board::new();
    // L in West state against the right wall: North would need column 10.
    let piece = Tetromino::at(PieceKind::L, Rotation::West, 8, 5);
    assert!(piece.fits(&board));
    assert!(piece.try_rotate(&board, RotateDirection::Cw).is_none());
}
