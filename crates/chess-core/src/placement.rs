//! Reading and writing the piece-placement field of FEN.
//!
//! Only the board layout is covered: ranks 8 down to 1 separated by `/`,
//! digits for runs of empty squares, `PNBRQK` for White and `pnbrqk` for Black.

use std::str::FromStr;

use thiserror::Error;

use crate::{Board, File, Piece, Rank, Square};

/// Errors that can occur when parsing a piece-placement string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid piece placement: expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("invalid piece placement: rank {rank} has {squares} squares, expected 8")]
    RankWidth { rank: u8, squares: u32 },

    #[error("invalid piece placement: invalid character '{found}' in rank {rank}")]
    InvalidChar { rank: u8, found: char },
}

impl Board {
    /// The piece placement of the standard starting position.
    pub const STANDARD_PLACEMENT: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Builds a board from a piece-placement string.
    ///
    /// # Errors
    ///
    /// Returns a [`PlacementError`] if the string does not describe exactly
    /// eight ranks of eight squares using valid piece letters and digits.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::RankCount(ranks.len()));
        }

        let mut board = Board::new();
        for (rank, row) in Rank::ALL.into_iter().rev().zip(ranks) {
            let rank_number = rank.index() + 1;
            let mut squares = 0u32;
            for c in row.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    squares += run;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    let file = File::from_index(squares as u8).ok_or(PlacementError::RankWidth {
                        rank: rank_number,
                        squares: squares + 1,
                    })?;
                    board.set(Square::new(file, rank), Some(piece));
                    squares += 1;
                } else {
                    return Err(PlacementError::InvalidChar {
                        rank: rank_number,
                        found: c,
                    });
                }
            }
            if squares != 8 {
                return Err(PlacementError::RankWidth {
                    rank: rank_number,
                    squares,
                });
            }
        }

        Ok(board)
    }

    /// Writes this board as a piece-placement string.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(71);
        for (i, rank) in Rank::ALL.into_iter().rev().enumerate() {
            if i > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for file in File::ALL {
                match self.get_at(file, rank) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_placement(s)
    }
}
