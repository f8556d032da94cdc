//! Pieces module - shape tables and the active piece
//!
//! Every kind owns a fixed list of rotation states. A state is four offsets
//! from the piece anchor. The number of states differs per kind (O has one,
//! I/S/Z have two, T/J/L have four) and rotating simply walks that list,
//! wrapping in both directions. There are no wall kicks: a rotation that
//! would collide is rejected by the engine.

use crate::types::{Action, PieceKind, Rgb, BOARD_WIDTH};

/// Offset of a single cell relative to the piece anchor
pub type Offset = (i8, i8);

/// One orientation of a piece - four offsets from the anchor
pub type RotationState = [Offset; 4];

/// Spawn anchor for new pieces (x, y): horizontal center of the top row
pub const SPAWN_POSITION: (i8, i8) = ((BOARD_WIDTH / 2) as i8, 0);

static O_STATES: [RotationState; 1] = [[(0, 0), (0, 1), (1, 0), (1, 1)]];

static I_STATES: [RotationState; 2] = [
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
    [(0, -1), (0, 0), (0, 1), (0, 2)],
];

static T_STATES: [RotationState; 4] = [
    [(-1, 0), (0, 0), (1, 0), (0, 1)],
    [(-1, 0), (0, 0), (0, -1), (0, 1)],
    [(-1, 0), (0, 0), (1, 0), (0, -1)],
    [(1, 0), (0, 0), (0, -1), (0, 1)],
];

static J_STATES: [RotationState; 4] = [
    [(-1, 0), (0, 0), (1, 0), (1, 1)],
    [(0, -1), (0, 0), (0, 1), (-1, 1)],
    [(-1, 0), (0, 0), (1, 0), (-1, -1)],
    [(0, -1), (0, 0), (0, 1), (1, -1)],
];

static L_STATES: [RotationState; 4] = [
    [(-1, 0), (0, 0), (1, 0), (-1, 1)],
    [(0, -1), (0, 0), (0, 1), (-1, -1)],
    [(-1, 0), (0, 0), (1, 0), (1, -1)],
    [(0, -1), (0, 0), (0, 1), (1, 1)],
];

static S_STATES: [RotationState; 2] = [
    [(-1, 1), (0, 1), (0, 0), (1, 0)],
    [(-1, -1), (-1, 0), (0, 0), (0, 1)],
];

static Z_STATES: [RotationState; 2] = [
    [(-1, 0), (0, 0), (0, 1), (1, 1)],
    [(-1, 1), (-1, 0), (0, 0), (0, -1)],
];

/// All rotation states of a kind, in clockwise order.
pub fn rotation_states(kind: PieceKind) -> &'static [RotationState] {
    match kind {
        PieceKind::O => &O_STATES,
        PieceKind::I => &I_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
    }
}

/// Shape (cell offsets) of a kind in a given rotation state.
///
/// The index is normalized, so any value is accepted.
pub fn get_shape(kind: PieceKind, rotation: u8) -> RotationState {
    let states = rotation_states(kind);
    states[rotation as usize % states.len()]
}

/// Normalize a signed rotation step into `[0, count)`.
fn wrap_rotation(rotation: u8, step: i8, count: u8) -> u8 {
    (rotation as i16 + step as i16).rem_euclid(count as i16) as u8
}

/// The falling piece: kind, rotation index and anchor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a new piece at the spawn anchor in rotation 0
    pub fn new(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            rotation: 0,
            x,
            y,
        }
    }

    /// Place a piece explicitly. The rotation index is normalized.
    pub fn at(kind: PieceKind, rotation: u8, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: rotation % kind.rotation_count(),
            x,
            y,
        }
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    pub fn rotation_count(&self) -> u8 {
        self.kind.rotation_count()
    }

    /// Offsets of the current rotation state
    pub fn shape(&self) -> RotationState {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute grid cells covered by the piece (always four).
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// The piece as it would be after `action`.
    ///
    /// Pure: legality is the engine's concern.
    #[must_use]
    pub fn apply(self, action: Action) -> Self {
        let count = self.rotation_count();
        match action {
            Action::Descend => Self { y: self.y + 1, ..self },
            Action::MoveRight => Self { x: self.x + 1, ..self },
            Action::MoveLeft => Self { x: self.x - 1, ..self },
            Action::RotateCw => Self {
                rotation: wrap_rotation(self.rotation, 1, count),
                ..self
            },
            Action::RotateCcw => Self {
                rotation: wrap_rotation(self.rotation, -1, count),
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes_match_rotation_counts() {
        for kind in PieceKind::ALL {
            assert_eq!(rotation_states(kind).len(), kind.rotation_count() as usize);
        }
    }

    #[test]
    fn test_every_state_has_four_distinct_cells() {
        for kind in PieceKind::ALL {
            for state in rotation_states(kind) {
                for i in 0..4 {
                    for j in i + 1..4 {
                        assert_ne!(state[i], state[j], "{:?} repeats a cell", kind);
                    }
                }
            }
        }
    }

    #[test]
    fn test_ccw_from_zero_wraps_to_last_state() {
        assert_eq!(Piece::new(PieceKind::T).apply(Action::RotateCcw).rotation, 3);
        assert_eq!(Piece::new(PieceKind::I).apply(Action::RotateCcw).rotation, 1);
        assert_eq!(Piece::new(PieceKind::O).apply(Action::RotateCcw).rotation, 0);
    }

    #[test]
    fn test_cw_wraps_forward() {
        let piece = Piece::at(PieceKind::L, 3, 4, 4);
        assert_eq!(piece.apply(Action::RotateCw).rotation, 0);
    }

    #[test]
    fn test_at_normalizes_rotation() {
        assert_eq!(Piece::at(PieceKind::S, 5, 0, 0).rotation, 1);
        assert_eq!(Piece::at(PieceKind::O, 3, 0, 0).rotation, 0);
    }

    #[test]
    fn test_translation_moves_anchor_by_one() {
        let piece = Piece::new(PieceKind::J);
        assert_eq!(piece.apply(Action::Descend).y, piece.y + 1);
        assert_eq!(piece.apply(Action::MoveRight).x, piece.x + 1);
        assert_eq!(piece.apply(Action::MoveLeft).x, piece.x - 1);
        assert_eq!(piece.apply(Action::MoveLeft).rotation, piece.rotation);
    }
}
