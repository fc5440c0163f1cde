//! Random Move Chess Engine
//!
//! Picks a random piece among those that can move, then a random legal
//! destination for it. Useful for:
//! - The easiest computer opponent
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use chess_core::{Board, Color, Engine, Move, Piece, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;

#[cfg(test)]
mod lib_tests;

/// A chess engine that plays random legal moves.
///
/// The choice is two-staged: uniform over the pieces with at least one
/// legal move, then uniform over that piece's destinations. Pieces with
/// many moves are therefore not favoured.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    color: Color,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible engine for tests and seeded matches.
    pub fn with_seed(color: Color, seed: u64) -> Self {
        Self {
            color,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &mut Board) -> SearchResult {
        let own: Vec<Piece> = board.pieces(self.color).copied().collect();
        let movable: Vec<(Piece, Vec<_>)> = own
            .into_iter()
            .map(|p| (p, board.legal_moves_for(&p)))
            .filter(|(_, moves)| !moves.is_empty())
            .collect();
        if movable.is_empty() {
            return SearchResult::no_move(1);
        }

        let best_move = movable.choose(&mut self.rng).and_then(|(piece, moves)| {
            let to = *moves.choose(&mut self.rng)?;
            Some(Move::new(piece.id, piece.position, to))
        });
        trace!(color = %self.color, candidates = movable.len(), "random pick");

        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: movable.len() as u64,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn color(&self) -> Color {
        self.color
    }
}
