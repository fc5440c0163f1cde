//! Minimax and alpha-beta search over the simulate/undo primitive
//!
//! Both searches score every node from the searching side's perspective:
//! plies where that side moves maximize, the others minimize. Moves are
//! visited in board scan order and the root keeps the first move with the
//! strictly highest value, so results are deterministic for a given board.

use chess_core::{Board, Color, Move};
use tracing::trace;

use crate::eval::Evaluator;

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// Best move and its value (None if the side has no legal move)
    pub best_move: Option<(Move, f64)>,
    /// Positions visited, counting one per simulated move
    pub nodes: u64,
}

/// Plain minimax to `depth` plies (at least one) for `color`.
pub fn minimax_root(board: &mut Board, color: Color, depth: u8, eval: &Evaluator) -> SearchOutcome {
    let mut search = Search::new(color, eval);
    let best_move = search.root(board, depth, |s, board, depth| {
        s.minimax(board, depth, false)
    });
    SearchOutcome {
        best_move,
        nodes: search.nodes,
    }
}

/// Alpha-beta to `depth` plies (at least one) for `color`.
///
/// Each root move is searched with a full window, so the returned value
/// always equals [`minimax_root`]'s; only the chosen move may differ
/// between equally valued candidates.
pub fn alpha_beta_root(
    board: &mut Board,
    color: Color,
    depth: u8,
    eval: &Evaluator,
) -> SearchOutcome {
    let mut search = Search::new(color, eval);
    let best_move = search.root(board, depth, |s, board, depth| {
        s.alpha_beta(board, depth, f64::NEG_INFINITY, f64::INFINITY, false)
    });
    SearchOutcome {
        best_move,
        nodes: search.nodes,
    }
}

struct Search<'a> {
    color: Color,
    eval: &'a Evaluator,
    nodes: u64,
}

impl<'a> Search<'a> {
    fn new(color: Color, eval: &'a Evaluator) -> Self {
        Self {
            color,
            eval,
            nodes: 0,
        }
    }

    fn root<F>(&mut self, board: &mut Board, depth: u8, mut child: F) -> Option<(Move, f64)>
    where
        F: FnMut(&mut Self, &mut Board, u8) -> f64,
    {
        let depth = depth.max(1);
        let mut best: Option<(Move, f64)> = None;

        for mv in board.legal_moves_for_player(self.color) {
            let sim = board.simulate_move(mv.piece, mv.from, mv.to);
            self.nodes += 1;
            let score = child(self, board, depth - 1);
            board.undo_move(sim);

            trace!(%mv, score, "root move");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }
        best
    }

    fn side(&self, maximizing: bool) -> Color {
        if maximizing {
            self.color
        } else {
            self.color.other()
        }
    }

    fn minimax(&mut self, board: &mut Board, depth: u8, maximizing: bool) -> f64 {
        if depth == 0 {
            return self.eval.score(board, self.color);
        }

        let moves = board.legal_moves_for_player(self.side(maximizing));
        if moves.is_empty() {
            return 0.0;
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for mv in moves {
            let sim = board.simulate_move(mv.piece, mv.from, mv.to);
            self.nodes += 1;
            let score = self.minimax(board, depth - 1, !maximizing);
            board.undo_move(sim);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        if depth == 0 {
            return self.eval.score(board, self.color);
        }

        let moves = board.legal_moves_for_player(self.side(maximizing));
        if moves.is_empty() {
            return 0.0;
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for mv in moves {
            let sim = board.simulate_move(mv.piece, mv.from, mv.to);
            self.nodes += 1;
            let score = self.alpha_beta(board, depth - 1, alpha, beta, !maximizing);
            board.undo_move(sim);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
