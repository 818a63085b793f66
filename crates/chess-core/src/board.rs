//! The 8x8 grid of optional occupants.

use crate::{Color, File, Piece, PieceKind, Rank, Square};

/// Back-rank order from the A file to the H file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A board mapping each of the 64 squares to at most one piece.
///
/// Pieces are stored by value. The move generator only ever reads a board;
/// mutation is left to whoever owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Creates an empty board.
    pub const fn new() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates a board holding the standard starting position.
    pub fn standard() -> Self {
        let mut board = Board::new();
        board.initialize_standard_position();
        board
    }

    /// Returns the occupant of `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Places `occupant` on `sq`, replacing whatever was there.
    #[inline]
    pub fn set(&mut self, sq: Square, occupant: Option<Piece>) {
        self.squares[sq.index() as usize] = occupant;
    }

    /// Returns the occupant at the given file and rank.
    #[inline]
    pub fn get_at(&self, file: File, rank: Rank) -> Option<Piece> {
        self.get(Square::new(file, rank))
    }

    /// Places `occupant` at the given file and rank.
    #[inline]
    pub fn set_at(&mut self, file: File, rank: Rank, occupant: Option<Piece>) {
        self.set(Square::new(file, rank), occupant);
    }

    /// Empties every square.
    pub fn clear(&mut self) {
        self.squares = [None; 64];
    }

    /// Resets the board to the standard chess starting position.
    ///
    /// Ranks 3 through 6 are cleared.
    pub fn initialize_standard_position(&mut self) {
        self.clear();
        for color in Color::ALL {
            let pawn = Piece::new(PieceKind::Pawn, color);
            for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
                self.set_at(file, color.back_rank(), Some(Piece::new(kind, color)));
                self.set_at(file, color.pawn_start_rank(), Some(pawn));
            }
        }
    }

    /// Iterates over the contents of all 64 squares, A1 through H8.
    pub fn occupants(&self) -> impl Iterator<Item = Option<Piece>> + '_ {
        self.squares.iter().copied()
    }

    /// Iterates over occupied squares and their pieces, A1 through H8.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL
            .into_iter()
            .filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn white(kind: PieceKind) -> Option<Piece> {
        Some(Piece::new(kind, Color::White))
    }

    fn black(kind: PieceKind) -> Option<Piece> {
        Some(Piece::new(kind, Color::Black))
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(Square::ALL.iter().all(|&s| board.get(s).is_none()));
        assert_eq!(board, Board::default());
    }

    #[test]
    fn get_and_set_by_square() {
        let mut board = Board::new();
        board.set(Square::A1, white(PieceKind::Pawn));
        assert_eq!(board.get(Square::A1), white(PieceKind::Pawn));

        board.set(Square::A1, None);
        assert_eq!(board.get(Square::A1), None);

        board.set(Square::H8, black(PieceKind::King));
        board.set(sq("D4"), white(PieceKind::Knight));
        assert_eq!(board.get(Square::H8), black(PieceKind::King));
        assert_eq!(board.get(sq("D4")), white(PieceKind::Knight));
    }

    #[test]
    fn set_overwrites() {
        let mut board = Board::new();
        board.set(sq("E5"), white(PieceKind::Rook));
        board.set(sq("E5"), black(PieceKind::Queen));
        assert_eq!(board.get(sq("E5")), black(PieceKind::Queen));
        assert_eq!(board.occupied().count(), 1);
    }

    #[test]
    fn coordinate_access_matches_square_access() {
        let mut board = Board::new();
        board.set_at(File::D, Rank::R4, white(PieceKind::Bishop));
        assert_eq!(board.get(sq("D4")), white(PieceKind::Bishop));

        board.set(sq("E5"), black(PieceKind::Queen));
        assert_eq!(board.get_at(File::E, Rank::R5), black(PieceKind::Queen));
    }

    #[test]
    fn clear_empties_every_square() {
        let mut board = Board::standard();
        board.set(sq("D4"), white(PieceKind::Knight));
        board.clear();
        assert!(board.occupants().all(|o| o.is_none()));
    }

    #[test]
    fn standard_position() {
        let mut board = Board::new();
        board.set(sq("E4"), black(PieceKind::Queen));
        board.initialize_standard_position();

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in File::ALL.into_iter().zip(back) {
            assert_eq!(board.get_at(file, Rank::R1), white(kind));
            assert_eq!(board.get_at(file, Rank::R2), white(PieceKind::Pawn));
            assert_eq!(board.get_at(file, Rank::R7), black(PieceKind::Pawn));
            assert_eq!(board.get_at(file, Rank::R8), black(kind));
            for rank in [Rank::R3, Rank::R4, Rank::R5, Rank::R6] {
                assert_eq!(board.get_at(file, rank), None);
            }
        }
        assert_eq!(board.occupied().count(), 32);
    }

    #[test]
    fn occupants_cover_all_squares() {
        let mut board = Board::new();
        assert_eq!(board.occupants().count(), 64);
        assert!(board.occupants().all(|o| o.is_none()));

        board.set(Square::A1, white(PieceKind::Rook));
        board.set(Square::H8, black(PieceKind::King));
        assert_eq!(board.occupants().filter(Option::is_some).count(), 2);

        board.initialize_standard_position();
        assert_eq!(board.occupants().count(), 64);
        assert_eq!(board.occupants().filter(Option::is_some).count(), 32);
    }

    #[test]
    fn occupied_reports_squares() {
        let mut board = Board::new();
        board.set(sq("C3"), black(PieceKind::Pawn));
        board.set(Square::A1, white(PieceKind::Rook));
        let occupied: Vec<_> = board.occupied().collect();
        assert_eq!(
            occupied,
            vec![
                (Square::A1, Piece::new(PieceKind::Rook, Color::White)),
                (sq("C3"), Piece::new(PieceKind::Pawn, Color::Black)),
            ]
        );
    }
}
