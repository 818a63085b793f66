//! Pseudo-legal move generation for a single piece.
//!
//! This crate provides:
//! - [`PossibleMoves`] - the capability implemented for every [`Piece`](chess_core::Piece)
//! - [`possible_moves`] - the same query as a free function
//! - [`SquareSet`] - the set of destination squares a query returns
//! - [`directions`] - the offset tables driving the step and slide rules
//!
//! Moves are pseudo-legal: they follow each piece's movement pattern and the
//! board's occupancy, but ignore check, pins, castling, en passant, and
//! promotion.
//!
//! # Example
//!
//! ```
//! use chess_core::{Board, Color, Piece, Square};
//! use chess_moves::PossibleMoves;
//!
//! let board = Board::standard();
//! let pawn = Piece::make("pawn", Color::White).unwrap();
//! let e2: Square = "E2".parse().unwrap();
//! let moves = pawn.possible_moves(&board, e2);
//! assert_eq!(moves.to_string(), "E3, E4");
//! ```

pub mod movegen;
mod square_set;

pub use movegen::{
    directions, possible_moves, slide_moves, step_moves, Movement, Offset, PossibleMoves,
};
pub use square_set::{SquareSet, SquareSetIter};
