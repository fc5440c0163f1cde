pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod piece;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use perft::perft;
pub use piece::Piece;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every computer opponent
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation of the best move from the engine's own perspective
    pub score: f64,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

impl SearchResult {
    /// Result for a side with no legal move.
    pub fn no_move(depth: u8) -> Self {
        Self {
            best_move: None,
            score: 0.0,
            depth,
            nodes: 0,
        }
    }
}

/// Trait that all computer opponents implement.
///
/// An engine plays one fixed color. `search` may explore the board through
/// simulate/undo but must hand it back exactly as it received it.
pub trait Engine: Send {
    /// Search the board for the configured color's best move.
    ///
    /// Callers should check [`Board::game_status`] first; with no legal
    /// move available the result carries `best_move: None`.
    fn search(&mut self, board: &mut Board) -> SearchResult;

    /// The `(piece, destination)` choice, without search statistics.
    fn get_move(&mut self, board: &mut Board) -> Option<Move> {
        self.search(board).best_move
    }

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Side this engine plays
    fn color(&self) -> Color;

    /// Replacement kind when one of this engine's pawns reaches the last rank.
    fn choose_promotion(&self) -> PieceKind {
        PieceKind::Queen
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
