//! Tournament configuration loaded from TOML
//!
//! ```toml
//! name = "Club night"
//! games_per_match = 4
//! max_moves_per_game = 150
//! seed = 7
//! players = ["random", "minimax", "aggressive", "defensive"]
//!
//! [weights]
//! mobility = 0.2
//! ```
//!
//! Every key is optional; missing ones take the defaults below.

use serde::{Deserialize, Serialize};
use std::path::Path;

use classical_engine::EvalWeights;

use crate::error::TournamentError;
use crate::match_runner::MatchConfig;
use crate::players::{AiKind, EngineOptions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub name: String,
    pub games_per_match: u32,
    /// Plies before a game is adjudicated a draw
    pub max_moves_per_game: u32,
    pub alternate_colors: bool,
    /// Base seed for the random players; entropy when absent
    pub seed: Option<u64>,
    /// Overrides every searching player's default depth
    pub depth: Option<u8>,
    pub players: Vec<AiKind>,
    pub weights: Option<EvalWeights>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: "Round robin".to_string(),
            games_per_match: 2,
            max_moves_per_game: 200,
            alternate_colors: true,
            seed: None,
            depth: None,
            players: vec![AiKind::Random, AiKind::Minimax, AiKind::AlphaBeta],
            weights: None,
        }
    }
}

impl TournamentConfig {
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(contents)?)
    }

    /// Settings for each pairing of the round robin.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            games: self.games_per_match,
            max_moves: self.max_moves_per_game,
            alternate_colors: self.alternate_colors,
            engine: EngineOptions {
                depth: self.depth,
                seed: self.seed,
                weights: self.weights,
            },
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
