//! Turns command-line arguments and configuration into a move query.

use anyhow::Context;
use chess_core::{Board, Color, Piece, Square};
use chess_moves::{PossibleMoves, SquareSet};
use std::str::FromStr;

use crate::config::{FileConfig, PieceConfig, Setup};
use crate::render::render;
use crate::Args;

/// A piece placement given as `KIND:COLOR:SQUARE`, e.g. `pawn:black:e3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub square: Square,
    pub piece: Piece,
}

impl Placement {
    fn parse_parts(kind: &str, color: &str, square: &str) -> anyhow::Result<Self> {
        let color: Color = color.parse()?;
        Ok(Placement {
            piece: Piece::make(kind, color)?,
            square: square.parse()?,
        })
    }
}

impl FromStr for Placement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [kind, color, square] => Self::parse_parts(kind, color, square),
            _ => anyhow::bail!("invalid placement {s:?}: expected KIND:COLOR:SQUARE"),
        }
    }
}

impl TryFrom<&PieceConfig> for Placement {
    type Error = anyhow::Error;

    fn try_from(config: &PieceConfig) -> Result<Self, Self::Error> {
        Self::parse_parts(&config.kind, &config.color, &config.square)
    }
}

/// Everything needed to answer one "where can this piece go" question.
#[derive(Debug, Clone)]
pub struct Query {
    pub piece: Piece,
    pub origin: Square,
    pub board: Board,
    pub show_board: bool,
}

impl Query {
    /// Builds a query, letting command-line values override `config`.
    pub fn build(args: &Args, config: &FileConfig) -> anyhow::Result<Self> {
        let color: Color = match args.color.as_deref().or(config.color.as_deref()) {
            Some(name) => name.parse()?,
            None => Color::White,
        };
        let piece = Piece::make(&args.piece, color)?;
        let origin = Square::from_notation(&args.square)?;

        let mut board = match &args.placement {
            Some(placement) => Board::from_placement(placement)?,
            None => match args.setup.or(config.setup).unwrap_or_default() {
                Setup::Empty => Board::new(),
                Setup::Standard => Board::standard(),
            },
        };

        for entry in &config.pieces {
            let placement = Placement::try_from(entry)
                .with_context(|| format!("invalid piece in config: {entry:?}"))?;
            board.set(placement.square, Some(placement.piece));
        }
        for text in &args.place {
            let placement: Placement = text.parse()?;
            board.set(placement.square, Some(placement.piece));
        }

        tracing::debug!(
            occupied = board.occupied().count(),
            "board ready: {}",
            board.placement()
        );

        Ok(Query {
            piece,
            origin,
            board,
            show_board: args.show_board || config.show_board.unwrap_or(false),
        })
    }

    /// Generates the destinations for this query.
    pub fn moves(&self) -> SquareSet {
        self.piece.possible_moves(&self.board, self.origin)
    }

    /// Formats the answer, optionally preceded by the board.
    pub fn report(&self) -> String {
        let moves = self.moves();
        tracing::info!(
            piece = %self.piece,
            origin = %self.origin,
            count = moves.len(),
            "generated moves"
        );

        let list = if moves.is_empty() {
            "none".to_string()
        } else {
            moves.join(", ")
        };
        let line = format!(
            "Possible moves for {} at {}: {}\n",
            self.piece, self.origin, list
        );

        if self.show_board {
            render(&self.board) + &line
        } else {
            line
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{InvalidNotation, PieceKind, PlacementError, UnknownPieceKind};
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("possible-moves").chain(extra.iter().copied()))
            .unwrap()
    }

    fn build(extra: &[&str]) -> anyhow::Result<Query> {
        Query::build(&args(extra), &FileConfig::default())
    }

    #[test]
    fn pawn_on_default_board() {
        let query = build(&["pawn", "e2"]).unwrap();
        assert_eq!(query.piece, Piece::new(PieceKind::Pawn, Color::White));
        assert_eq!(query.board, Board::new());
        assert_eq!(
            query.report(),
            "Possible moves for White Pawn at E2: E3, E4\n"
        );
    }

    #[test]
    fn black_color_flag() {
        let query = build(&["KNIGHT", "G8", "--color", "black", "--setup", "standard"]).unwrap();
        assert_eq!(query.piece.color(), Color::Black);
        assert_eq!(
            query.report(),
            "Possible moves for Black Knight at G8: F6, H6\n"
        );
    }

    #[test]
    fn no_moves_prints_none() {
        let query = build(&["rook", "a1", "--setup", "standard"]).unwrap();
        assert_eq!(
            query.report(),
            "Possible moves for White Rook at A1: none\n"
        );
    }

    #[test]
    fn place_flags_add_pieces() {
        let query = build(&["pawn", "e2", "--place", "knight:black:e3", "--place", "bishop:Black:D3"])
            .unwrap();
        assert_eq!(query.moves().join(","), "D3");
    }

    #[test]
    fn placement_flag_replaces_setup() {
        let query = build(&[
            "queen",
            "d4",
            "--setup",
            "standard",
            "--placement",
            "8/8/8/8/8/8/8/8",
        ])
        .unwrap();
        assert_eq!(query.moves().len(), 27);
    }

    #[test]
    fn show_board_prepends_rendering() {
        let query = build(&["king", "a1", "--show-board"]).unwrap();
        let report = query.report();
        assert!(report.starts_with("     A     B"));
        assert!(report.ends_with("Possible moves for White King at A1: B1, A2, B2\n"));
    }

    #[test]
    fn config_supplies_defaults() {
        let config = FileConfig::parse(
            r#"
color = "black"
setup = "standard"
show_board = true

[[pieces]]
kind = "queen"
color = "white"
square = "e6"
"#,
        )
        .unwrap();
        let query = Query::build(&args(&["pawn", "d7"]), &config).unwrap();
        assert_eq!(query.piece.color(), Color::Black);
        assert!(query.show_board);
        assert_eq!(query.moves().join(","), "D5,D6,E6");
    }

    #[test]
    fn arguments_override_config() {
        let config = FileConfig::parse("color = \"black\"\nsetup = \"standard\"").unwrap();
        let query =
            Query::build(&args(&["pawn", "e2", "--color", "white", "--setup", "empty"]), &config)
                .unwrap();
        assert_eq!(query.piece.color(), Color::White);
        assert_eq!(query.board, Board::new());
    }

    #[test]
    fn unknown_piece_is_an_error() {
        let err = build(&["emperor", "e2"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnknownPieceKind>(),
            Some(&UnknownPieceKind("emperor".to_string()))
        );
    }

    #[test]
    fn invalid_square_is_an_error() {
        let err = build(&["pawn", "e9"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidNotation>(),
            Some(&InvalidNotation::Square("e9".to_string()))
        );
    }

    #[test]
    fn invalid_placement_is_an_error() {
        let err = build(&["pawn", "e2", "--placement", "8/8"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PlacementError>(),
            Some(&PlacementError::RankCount(2))
        );
    }

    #[test]
    fn malformed_place_flag_is_an_error() {
        assert!(build(&["pawn", "e2", "--place", "knight:black"]).is_err());
        assert!(build(&["pawn", "e2", "--place", "knight:green:e3"]).is_err());
    }

    #[test]
    fn placement_parse() {
        let placement: Placement = "rook:white:H1".parse().unwrap();
        assert_eq!(placement.square, Square::H1);
        assert_eq!(placement.piece, Piece::new(PieceKind::Rook, Color::White));
    }
}
