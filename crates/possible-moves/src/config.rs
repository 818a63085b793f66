//! Optional TOML configuration.
//!
//! Values here are defaults; anything given on the command line wins.

use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {path:?}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Starting layout of the board before extra pieces are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Setup {
    /// No pieces.
    #[default]
    Empty,
    /// The standard chess starting position.
    Standard,
}

/// A piece to place on the board before generating moves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PieceConfig {
    /// Piece kind name (e.g. "pawn").
    pub kind: String,
    /// "white" or "black".
    pub color: String,
    /// Square notation (e.g. "E4").
    pub square: String,
}

/// Contents of `possible-moves.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Color of the queried piece. Defaults to White.
    #[serde(default)]
    pub color: Option<String>,
    /// Starting layout. Defaults to an empty board.
    #[serde(default)]
    pub setup: Option<Setup>,
    /// Print the board before the move list.
    #[serde(default)]
    pub show_board: Option<bool>,
    /// Extra pieces, placed after the setup.
    #[serde(default)]
    pub pieces: Vec<PieceConfig>,
}

impl FileConfig {
    /// Loads configuration.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// path is read if present and an empty configuration is used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = Self::default_path();
                if !default.exists() {
                    tracing::debug!("no config file at {:?}, using defaults", default);
                    return Ok(Self::default());
                }
                default
            }
        };

        tracing::debug!("loading config from {:?}", path);
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default configuration path, `possible-moves.toml` in the
    /// current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("possible-moves.toml")
    }
}
