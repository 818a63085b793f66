//! possible-moves - lists where a chess piece could move from a square.
//!
//! Moves are pseudo-legal: check, castling, en passant, and promotion are
//! not considered.

mod config;
mod query;
mod render;

use anyhow::Context;
use clap::Parser;
use config::{FileConfig, Setup};
use query::Query;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Lists the squares a chess piece could move to.
#[derive(Parser, Debug)]
#[command(name = "possible-moves")]
#[command(about = "Lists the squares a chess piece could move to from a given square")]
pub struct Args {
    /// Piece kind: pawn, knight, bishop, rook, queen, or king
    piece: String,

    /// Square the piece stands on, e.g. E4
    square: String,

    /// Color of the piece (white or black) [default: white]
    #[arg(long)]
    color: Option<String>,

    /// Starting layout of the board [default: empty]
    #[arg(long, value_enum)]
    setup: Option<Setup>,

    /// Board as a FEN piece-placement field; replaces --setup
    #[arg(long)]
    placement: Option<String>,

    /// Extra piece as KIND:COLOR:SQUARE (repeatable)
    #[arg(long)]
    place: Vec<String>,

    /// Print the board before the move list
    #[arg(long)]
    show_board: bool,

    /// Path to a TOML config file [default: possible-moves.toml if present]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<String> {
    let config = FileConfig::load(args.config.as_deref()).context("loading configuration")?;
    let query = Query::build(args, &config)?;
    tracing::debug!("querying {} at {}", query.piece, query.origin);
    Ok(query.report())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    tracing::debug!(?args, "starting possible-moves");

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
