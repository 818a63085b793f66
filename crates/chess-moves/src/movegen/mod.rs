//! Pseudo-legal destination generation.
//!
//! Every piece kind maps to one [`Movement`] rule. The step and slide rules
//! are shared and driven by the tables in [`directions`]; pawns have their own
//! color-dependent rule. None of these consider check, pins, castling,
//! en passant, or promotion.

pub mod directions;
mod pawn;

use chess_core::{Board, Color, Piece, Square};

use crate::SquareSet;
pub use directions::{Movement, Offset};

/// The capability every piece exposes: listing the squares it could move to.
pub trait PossibleMoves {
    /// Returns the destinations reachable from `origin` on `board`.
    ///
    /// The board is not checked for actually holding this piece at `origin`.
    /// The result never contains `origin`.
    fn possible_moves(&self, board: &Board, origin: Square) -> SquareSet;
}

impl PossibleMoves for Piece {
    #[inline]
    fn possible_moves(&self, board: &Board, origin: Square) -> SquareSet {
        possible_moves(*self, board, origin)
    }
}

/// Returns the destinations `piece` could reach from `origin` on `board`.
pub fn possible_moves(piece: Piece, board: &Board, origin: Square) -> SquareSet {
    let color = piece.color();
    match Movement::of(piece.kind()) {
        Movement::Step(offsets) => step_moves(board, origin, color, offsets),
        Movement::Slide(directions) => slide_moves(board, origin, color, directions),
        Movement::Pawn => pawn::pawn_moves(board, origin, color),
    }
}

/// Returns true if a piece of `color` may land on `target`: it is empty or
/// holds an enemy.
#[inline]
fn can_land(board: &Board, target: Square, color: Color) -> bool {
    board.get(target).map_or(true, |occupant| occupant.color() != color)
}

/// Fixed-offset movement: each offset is tried once, landing on empty or
/// enemy squares.
pub fn step_moves(board: &Board, origin: Square, color: Color, offsets: &[Offset]) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(df, dr)| origin.offset(df, dr))
        .filter(|&target| can_land(board, target, color))
        .collect()
}

/// Sliding movement: walks each ray outward from `origin`, one square at a
/// time.
///
/// Empty squares are added and the walk continues. An enemy square is added
/// and ends the ray. A friendly square ends the ray without being added.
pub fn slide_moves(
    board: &Board,
    origin: Square,
    color: Color,
    directions: &[Offset],
) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    for &(df, dr) in directions {
        let mut current = origin;
        while let Some(next) = current.offset(df, dr) {
            match board.get(next) {
                None => {
                    moves.insert(next);
                    current = next;
                }
                Some(occupant) => {
                    if occupant.color() != color {
                        moves.insert(next);
                    }
                    break;
                }
            }
        }
    }
    moves
}
