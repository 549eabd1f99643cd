//! Pieces module - tetromino shapes and rotation states.
//!
//! Each family has an ordered list of rotation states; a state is 4 cell
//! offsets `(dx, dy)` from the piece anchor. Families do not all have the
//! same number of states: I, S and Z have 2, O has 1, J, L and T have 4.
//! The tables are static, process-wide, and never mutated.

use crate::types::PieceKind;

/// Offset of a single cell relative to the piece anchor.
pub type CellOffset = (i8, i8);

/// One rotation state - 4 cell offsets from the piece anchor.
pub type PieceShape = [CellOffset; 4];

/// Spawn anchor for new pieces: centered horizontally, top row.
pub const SPAWN_POSITION: (i8, i8) = (crate::types::BOARD_WIDTH as i8 / 2 - 2, 0);

const I_STATES: [PieceShape; 2] = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
];

const J_STATES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (1, 2), (0, 2)],
];

const L_STATES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

const O_STATES: [PieceShape; 1] = [[(1, 0), (2, 0), (1, 1), (2, 1)]];

const S_STATES: [PieceShape; 2] = [
    [(1, 1), (2, 1), (0, 2), (1, 2)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
];

const T_STATES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_STATES: [PieceShape; 2] = [
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
];

/// Get the rotation-state table for a family.
pub fn rotation_states(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::Z => &Z_STATES,
    }
}

/// One falling tetromino: family, rotation index and board-relative anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Rotation index, always kept in `[0, state count)`.
    pub rot: u8,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn anchor with rotation 0.
    pub fn new(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self { kind, rot: 0, x, y }
    }

    /// The active rotation state's offsets.
    pub fn shape(&self) -> PieceShape {
        let states = rotation_states(self.kind);
        states[self.rot as usize % states.len()]
    }

    /// The 4 absolute board cells the piece currently occupies.
    /// Pure function of state.
    pub fn cells(&self) -> [CellOffset; 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Advance the rotation index modulo the family's state count.
    ///
    /// `dir` is `+1` (clockwise) or `-1`. Returns the previous index so the
    /// caller can revert a rotation that fails board validation - this
    /// method itself never consults the board.
    pub fn rotate(&mut self, dir: i8) -> u8 {
        let old = self.rot;
        let count = rotation_states(self.kind).len() as i16;
        let next = (self.rot as i16 + dir as i16).rem_euclid(count);
        self.rot = next as u8;
        old
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_counts() {
        assert_eq!(rotation_states(PieceKind::I).len(), 2);
        assert_eq!(rotation_states(PieceKind::J).len(), 4);
        assert_eq!(rotation_states(PieceKind::L).len(), 4);
        assert_eq!(rotation_states(PieceKind::O).len(), 1);
        assert_eq!(rotation_states(PieceKind::S).len(), 2);
        assert_eq!(rotation_states(PieceKind::T).len(), 4);
        assert_eq!(rotation_states(PieceKind::Z).len(), 2);
    }

    #[test]
    fn test_spawn_anchor() {
        let piece = Piece::new(PieceKind::T);
        assert_eq!((piece.x, piece.y), (3, 0));
        assert_eq!(piece.rot, 0);
    }

    #[test]
    fn test_cells_are_anchor_plus_offsets() {
        let piece = Piece {
            kind: PieceKind::I,
            rot: 0,
            x: 3,
            y: 0,
        };
        assert_eq!(piece.cells(), [(3, 1), (4, 1), (5, 1), (6, 1)]);
    }

    #[test]
    fn test_rotate_returns_previous_index() {
        let mut piece = Piece::new(PieceKind::J);
        assert_eq!(piece.rotate(1), 0);
        assert_eq!(piece.rot, 1);
        assert_eq!(piece.rotate(-1), 1);
        assert_eq!(piece.rot, 0);
    }

    #[test]
    fn test_rotate_wraps_backwards() {
        let mut piece = Piece::new(PieceKind::L);
        piece.rotate(-1);
        assert_eq!(piece.rot, 3);
    }

    #[test]
    fn test_o_piece_rotation_is_noop() {
        let mut piece = Piece::new(PieceKind::O);
        let cells = piece.cells();
        piece.rotate(1);
        assert_eq!(piece.rot, 0);
        assert_eq!(piece.cells(), cells);
        piece.rotate(-1);
        assert_eq!(piece.cells(), cells);
    }
}
