//! Pieces tests - rotation tables and pure transitions

use blockfall::core::{get_shape, rotation_states, Piece, SPAWN_POSITION};
use blockfall::types::{Action, PieceKind, Rgb};

// ============== Shape Tests ==============

#[test]
fn test_o_piece_shape() {
    assert_eq!(rotation_states(PieceKind::O).len(), 1);
    assert_eq!(get_shape(PieceKind::O, 0), [(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn test_i_piece_shapes() {
    assert_eq!(get_shape(PieceKind::I, 0), [(-1, 0), (0, 0), (1, 0), (2, 0)]);
    assert_eq!(get_shape(PieceKind::I, 1), [(0, -1), (0, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_t_piece_shapes() {
    assert_eq!(get_shape(PieceKind::T, 0), [(-1, 0), (0, 0), (1, 0), (0, 1)]);
    assert_eq!(get_shape(PieceKind::T, 1), [(-1, 0), (0, 0), (0, -1), (0, 1)]);
    assert_eq!(get_shape(PieceKind::T, 2), [(-1, 0), (0, 0), (1, 0), (0, -1)]);
    assert_eq!(get_shape(PieceKind::T, 3), [(1, 0), (0, 0), (0, -1), (0, 1)]);
}

#[test]
fn test_j_piece_shapes() {
    assert_eq!(get_shape(PieceKind::J, 0), [(-1, 0), (0, 0), (1, 0), (1, 1)]);
    assert_eq!(get_shape(PieceKind::J, 1), [(0, -1), (0, 0), (0, 1), (-1, 1)]);
    assert_eq!(get_shape(PieceKind::J, 2), [(-1, 0), (0, 0), (1, 0), (-1, -1)]);
    assert_eq!(get_shape(PieceKind::J, 3), [(0, -1), (0, 0), (0, 1), (1, -1)]);
}

#[test]
fn test_l_piece_shapes() {
    assert_eq!(get_shape(PieceKind::L, 0), [(-1, 0), (0, 0), (1, 0), (-1, 1)]);
    assert_eq!(get_shape(PieceKind::L, 1), [(0, -1), (0, 0), (0, 1), (-1, -1)]);
    assert_eq!(get_shape(PieceKind::L, 2), [(-1, 0), (0, 0), (1, 0), (1, -1)]);
    assert_eq!(get_shape(PieceKind::L, 3), [(0, -1), (0, 0), (0, 1), (1, 1)]);
}

#[test]
fn test_s_and_z_piece_shapes() {
    assert_eq!(get_shape(PieceKind::S, 0), [(-1, 1), (0, 1), (0, 0), (1, 0)]);
    assert_eq!(get_shape(PieceKind::S, 1), [(-1, -1), (-1, 0), (0, 0), (0, 1)]);
    assert_eq!(get_shape(PieceKind::Z, 0), [(-1, 0), (0, 0), (0, 1), (1, 1)]);
    assert_eq!(get_shape(PieceKind::Z, 1), [(-1, 1), (-1, 0), (0, 0), (0, -1)]);
}

#[test]
fn test_get_shape_normalizes_index() {
    assert_eq!(get_shape(PieceKind::I, 3), get_shape(PieceKind::I, 1));
    assert_eq!(get_shape(PieceKind::T, 6), get_shape(PieceKind::T, 2));
    assert_eq!(get_shape(PieceKind::O, 255), get_shape(PieceKind::O, 0));
}

#[test]
fn test_colors() {
    assert_eq!(PieceKind::O.color(), Rgb::new(255, 255, 0));
    assert_eq!(PieceKind::I.color(), Rgb::new(0, 255, 255));
    assert_eq!(PieceKind::T.color(), Rgb::new(127, 2, 122));
    assert_eq!(PieceKind::J.color(), Rgb::new(0, 0, 255));
    assert_eq!(PieceKind::L.color(), Rgb::new(253, 128, 44));
    assert_eq!(PieceKind::S.color(), Rgb::new(0, 255, 0));
    assert_eq!(PieceKind::Z.color(), Rgb::new(255, 0, 0));
}

// ============== Transition Tests ==============

#[test]
fn test_spawn() {
    assert_eq!(SPAWN_POSITION, (5, 0));
    let piece = Piece::new(PieceKind::T);
    assert_eq!((piece.x, piece.y, piece.rotation), (5, 0, 0));
    assert_eq!(piece.cells(), [(4, 0), (5, 0), (6, 0), (5, 1)]);
}

#[test]
fn test_translations_move_anchor_by_one() {
    let piece = Piece::at(PieceKind::L, 1, 4, 7);
    assert_eq!(piece.apply(Action::Descend), Piece::at(PieceKind::L, 1, 4, 8));
    assert_eq!(piece.apply(Action::MoveLeft), Piece::at(PieceKind::L, 1, 3, 7));
    assert_eq!(piece.apply(Action::MoveRight), Piece::at(PieceKind::L, 1, 5, 7));
}

#[test]
fn test_ccw_from_zero_wraps_to_last_state() {
    assert_eq!(Piece::new(PieceKind::T).apply(Action::RotateCcw).rotation, 3);
    assert_eq!(Piece::new(PieceKind::S).apply(Action::RotateCcw).rotation, 1);
    assert_eq!(Piece::new(PieceKind::O).apply(Action::RotateCcw).rotation, 0);
}

#[test]
fn test_full_turn_restores_piece() {
    for kind in PieceKind::ALL {
        let start = Piece::at(kind, 0, 4, 10);
        for action in [Action::RotateCw, Action::RotateCcw] {
            let mut piece = start;
            for _ in 0..kind.rotation_count() {
                piece = piece.apply(action);
            }
            assert_eq!(piece, start, "{:?} {:?}", kind, action);
            assert_eq!(piece.cells(), start.cells());
        }
    }
}

#[test]
fn test_cw_then_ccw_is_identity() {
    for kind in PieceKind::ALL {
        for rotation in 0..kind.rotation_count() {
            let piece = Piece::at(kind, rotation, 5, 5);
            assert_eq!(piece.apply(Action::RotateCw).apply(Action::RotateCcw), piece);
        }
    }
}
