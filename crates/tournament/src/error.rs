//! Tournament errors

use std::path::PathBuf;

use chess_core::{Color, MoveError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tournament config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid results file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown AI '{0}' (expected one of: random, minimax, alphabeta, expert, aggressive, defensive)")]
    UnknownAi(String),

    #[error("{engine} was asked to play {expected} but plays {actual}")]
    WrongColor {
        engine: String,
        expected: Color,
        actual: Color,
    },

    #[error("{engine} returned no move while legal moves exist")]
    NoMove { engine: String },

    #[error("{engine} played an illegal move: {source}")]
    IllegalMove {
        engine: String,
        #[source]
        source: MoveError,
    },

    #[error("a round robin needs at least two players, got {0}")]
    NotEnoughPlayers(usize),
}

impl TournamentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TournamentError::Io {
            path: path.into(),
            source,
        }
    }
}
