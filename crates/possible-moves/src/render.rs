//! Box-drawing board rendering for the terminal.

use chess_core::{Board, File, Rank};
use std::fmt::Write;

const CELL: &str = "─────";

/// Renders `board` with rank 8 at the top and Unicode piece symbols.
pub fn render(board: &Board) -> String {
    let labels = File::ALL
        .iter()
        .map(File::to_string)
        .collect::<Vec<_>>()
        .join("     ");
    let border = |left: char, mid: char, right: char| {
        let inner = vec![CELL; 8].join(mid.to_string().as_str());
        format!("  {left}{inner}{right}")
    };

    let mut out = String::new();
    let _ = writeln!(out, "     {labels}");
    let _ = writeln!(out, "{}", border('┌', '┬', '┐'));
    for (i, rank) in Rank::ALL.into_iter().rev().enumerate() {
        let _ = write!(out, "{rank} │");
        for file in File::ALL {
            let symbol = board.get_at(file, rank).map_or(' ', |p| p.symbol());
            let _ = write!(out, "  {symbol}  │");
        }
        let _ = writeln!(out, " {rank}");
        if i < 7 {
            let _ = writeln!(out, "{}", border('├', '┼', '┤'));
        }
    }
    let _ = writeln!(out, "{}", border('└', '┴', '┘'));
    let _ = writeln!(out, "     {labels}");
    out
}
