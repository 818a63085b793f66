//! Pawn pushes and captures.

use chess_core::{Board, Color, Square};

use crate::SquareSet;

/// Returns the pawn destinations for `color` from `origin`.
///
/// A pawn pushes one square forward onto an empty square, or two from its
/// start rank when both squares are empty. It captures one square diagonally
/// forward, and only onto an enemy. A pawn on the last rank has no forward
/// squares and is not promoted.
pub(super) fn pawn_moves(board: &Board, origin: Square, color: Color) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    let direction = color.pawn_direction();

    if let Some(single) = origin.offset(0, direction).filter(|&s| board.get(s).is_none()) {
        moves.insert(single);
        if origin.rank() == color.pawn_start_rank() {
            if let Some(double) = origin
                .offset(0, 2 * direction)
                .filter(|&s| board.get(s).is_none())
            {
                moves.insert(double);
            }
        }
    }

    for file_delta in [-1, 1] {
        if let Some(target) = origin.offset(file_delta, direction) {
            if board.get(target).is_some_and(|p| p.color() != color) {
                moves.insert(target);
            }
        }
    }

    moves
}
