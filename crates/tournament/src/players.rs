//! The selectable computer opponents and how to build them

use std::fmt;
use std::str::FromStr;

use chess_core::{Color, Engine};
use classical_engine::{AlphaBetaEngine, EvalWeights, MinimaxEngine};
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

use crate::error::TournamentError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiKind {
    Random,
    Minimax,
    #[serde(alias = "alpha-beta")]
    AlphaBeta,
    Expert,
    Aggressive,
    Defensive,
}

/// Per-engine overrides shared by every player of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EngineOptions {
    /// Replaces the kind's default search depth
    pub depth: Option<u8>,
    /// Seeds the random player; ignored by the searching ones
    pub seed: Option<u64>,
    /// Evaluation weights for the searching players
    pub weights: Option<EvalWeights>,
}

impl AiKind {
    pub const ALL: [AiKind; 6] = [
        AiKind::Random,
        AiKind::Minimax,
        AiKind::AlphaBeta,
        AiKind::Expert,
        AiKind::Aggressive,
        AiKind::Defensive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AiKind::Random => "random",
            AiKind::Minimax => "minimax",
            AiKind::AlphaBeta => "alphabeta",
            AiKind::Expert => "expert",
            AiKind::Aggressive => "aggressive",
            AiKind::Defensive => "defensive",
        }
    }

    /// Builds an engine of this kind playing `color`.
    pub fn build(self, color: Color, options: &EngineOptions) -> Box<dyn Engine> {
        let alpha_beta = |mut engine: AlphaBetaEngine| {
            if let Some(depth) = options.depth {
                engine.set_depth(depth);
            }
            if let Some(weights) = options.weights {
                engine.set_weights(weights);
            }
            Box::new(engine) as Box<dyn Engine>
        };

        match self {
            AiKind::Random => match options.seed {
                Some(seed) => Box::new(RandomEngine::with_seed(color, seed)),
                None => Box::new(RandomEngine::new(color)),
            },
            AiKind::Minimax => {
                let mut engine = match options.depth {
                    Some(depth) => MinimaxEngine::with_depth(color, depth),
                    None => MinimaxEngine::new(color),
                };
                if let Some(weights) = options.weights {
                    engine.set_weights(weights);
                }
                Box::new(engine)
            }
            AiKind::AlphaBeta => alpha_beta(AlphaBetaEngine::new(color)),
            AiKind::Expert => alpha_beta(AlphaBetaEngine::expert(color)),
            AiKind::Aggressive => alpha_beta(AlphaBetaEngine::aggressive(color)),
            AiKind::Defensive => alpha_beta(AlphaBetaEngine::defensive(color)),
        }
    }
}

impl fmt::Display for AiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiKind {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "alpha-beta" | "alpha_beta" | "ab" => Ok(AiKind::AlphaBeta),
            "rand" => Ok(AiKind::Random),
            _ => AiKind::ALL
                .into_iter()
                .find(|kind| kind.as_str() == name)
                .ok_or_else(|| TournamentError::UnknownAi(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "players_tests.rs"]
mod players_tests;
