//! Direction and offset tables for every piece kind.
//!
//! Each entry is a `(file_delta, rank_delta)` pair applied with
//! [`Square::offset`](chess_core::Square::offset).

use chess_core::PieceKind;

/// A `(file_delta, rank_delta)` step.
pub type Offset = (i8, i8);

/// The four diagonal unit vectors.
pub const BISHOP_DIRECTIONS: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The four orthogonal unit vectors.
pub const ROOK_DIRECTIONS: [Offset; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// All eight unit vectors.
pub const QUEEN_DIRECTIONS: [Offset; 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// One step in any of the eight directions.
pub const KING_OFFSETS: [Offset; 8] = QUEEN_DIRECTIONS;

/// The eight L-shaped jumps.
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
];

/// How a piece kind turns its table into destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// One step per offset, no continuation.
    Step(&'static [Offset]),
    /// Walk each direction until blocked or off the board.
    Slide(&'static [Offset]),
    /// Color-dependent push and diagonal capture.
    Pawn,
}

impl Movement {
    /// Returns the movement rule for `kind`.
    pub const fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => Movement::Pawn,
            PieceKind::Knight => Movement::Step(&KNIGHT_OFFSETS),
            PieceKind::Bishop => Movement::Slide(&BISHOP_DIRECTIONS),
            PieceKind::Rook => Movement::Slide(&ROOK_DIRECTIONS),
            PieceKind::Queen => Movement::Slide(&QUEEN_DIRECTIONS),
            PieceKind::King => Movement::Step(&KING_OFFSETS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn distinct(table: &[Offset]) -> bool {
        table.iter().collect::<HashSet<_>>().len() == table.len()
    }

    #[test]
    fn tables_have_no_duplicates_or_null_steps() {
        for table in [
            &BISHOP_DIRECTIONS[..],
            &ROOK_DIRECTIONS[..],
            &QUEEN_DIRECTIONS[..],
            &KING_OFFSETS[..],
            &KNIGHT_OFFSETS[..],
        ] {
            assert!(distinct(table));
            assert!(!table.contains(&(0, 0)));
        }
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let queen: HashSet<_> = QUEEN_DIRECTIONS.iter().collect();
        let combined: HashSet<_> = ROOK_DIRECTIONS
            .iter()
            .chain(BISHOP_DIRECTIONS.iter())
            .collect();
        assert_eq!(queen, combined);
    }

    #[test]
    fn knight_offsets_are_l_shaped() {
        for (df, dr) in KNIGHT_OFFSETS {
            let (a, b) = (df.abs(), dr.abs());
            assert!((a, b) == (1, 2) || (a, b) == (2, 1));
        }
    }

    #[test]
    fn movement_by_kind() {
        assert_eq!(Movement::of(PieceKind::Pawn), Movement::Pawn);
        assert!(matches!(Movement::of(PieceKind::King), Movement::Step(t) if t.len() == 8));
        assert!(matches!(Movement::of(PieceKind::Knight), Movement::Step(t) if t == KNIGHT_OFFSETS));
        assert!(matches!(Movement::of(PieceKind::Bishop), Movement::Slide(t) if t.len() == 4));
        assert!(matches!(Movement::of(PieceKind::Rook), Movement::Slide(t) if t == ROOK_DIRECTIONS));
        assert!(matches!(Movement::of(PieceKind::Queen), Movement::Slide(t) if t.len() == 8));
        for kind in PieceKind::ALL {
            assert_eq!(
                matches!(Movement::of(kind), Movement::Slide(_)),
                kind.is_slider()
            );
        }
    }
}
