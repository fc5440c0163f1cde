//! Classical Chess Engines
//!
//! Depth-limited minimax and alpha-beta search over a hand-written
//! evaluation (material, piece-square tables, mobility, check). The
//! aggressive and defensive opponents are alpha-beta with a different
//! evaluation style; the expert is alpha-beta searching one ply deeper.

pub mod eval;
pub mod search;

use chess_core::{Board, Color, Engine, SearchResult};

pub use eval::{EvalStyle, EvalWeights, Evaluator};
pub use search::{alpha_beta_root, minimax_root, SearchOutcome};

pub const MINIMAX_DEPTH: u8 = 2;
pub const ALPHA_BETA_DEPTH: u8 = 3;
pub const EXPERT_DEPTH: u8 = 4;

fn into_result(outcome: SearchOutcome, depth: u8) -> SearchResult {
    SearchResult {
        best_move: outcome.best_move.map(|(mv, _)| mv),
        score: outcome.best_move.map_or(0.0, |(_, s)| s),
        depth,
        nodes: outcome.nodes,
    }
}

/// Exhaustive minimax without pruning.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    color: Color,
    depth: u8,
    evaluator: Evaluator,
}

impl MinimaxEngine {
    pub fn new(color: Color) -> Self {
        Self::with_depth(color, MINIMAX_DEPTH)
    }

    pub fn with_depth(color: Color, depth: u8) -> Self {
        Self {
            color,
            depth: depth.max(1),
            evaluator: Evaluator::default(),
        }
    }

    pub fn set_weights(&mut self, weights: EvalWeights) {
        self.evaluator.weights = weights;
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &mut Board) -> SearchResult {
        let outcome = minimax_root(board, self.color, self.depth, &self.evaluator);
        into_result(outcome, self.depth)
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn color(&self) -> Color {
        self.color
    }
}

/// Alpha-beta search parameterized by depth and evaluation style.
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine {
    color: Color,
    depth: u8,
    evaluator: Evaluator,
    name: &'static str,
}

impl AlphaBetaEngine {
    pub fn new(color: Color) -> Self {
        Self::with_depth(color, ALPHA_BETA_DEPTH)
    }

    pub fn with_depth(color: Color, depth: u8) -> Self {
        Self {
            color,
            depth: depth.max(1),
            evaluator: Evaluator::default(),
            name: "AlphaBeta",
        }
    }

    /// Standard evaluation, searched deeper.
    pub fn expert(color: Color) -> Self {
        Self {
            name: "Expert",
            ..Self::with_depth(color, EXPERT_DEPTH)
        }
    }

    pub fn aggressive(color: Color) -> Self {
        Self {
            name: "Aggressive",
            evaluator: Evaluator::new(EvalStyle::Aggressive),
            ..Self::new(color)
        }
    }

    pub fn defensive(color: Color) -> Self {
        Self {
            name: "Defensive",
            evaluator: Evaluator::new(EvalStyle::Defensive),
            ..Self::new(color)
        }
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth.max(1);
    }

    pub fn set_weights(&mut self, weights: EvalWeights) {
        self.evaluator.weights = weights;
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, board: &mut Board) -> SearchResult {
        let outcome = alpha_beta_root(board, self.color, self.depth, &self.evaluator);
        into_result(outcome, self.depth)
    }

    fn name(&self) -> &str {
        self.name
    }

    fn color(&self) -> Color {
        self.color
    }
}
