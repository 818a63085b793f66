//! Core types for chess.
//!
//! This crate provides the fundamental types used by the move generator:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Board`], the 8x8 grid of optional occupants
//! - Piece-placement (FEN board field) parsing and serialization

mod board;
mod color;
mod piece;
mod placement;
mod square;

pub use board::Board;
pub use color::{Color, UnknownColor};
pub use piece::{Piece, PieceKind, UnknownPieceKind};
pub use placement::PlacementError;
pub use square::{File, InvalidNotation, Rank, Square};
