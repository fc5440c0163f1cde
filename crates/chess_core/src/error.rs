//! Error types for the committing (validated) board operations.
//!
//! Search never sees these: it goes through simulate/undo, which cannot fail
//! on moves produced by the legal move generator.

use thiserror::Error;

use crate::types::{Color, PieceId, PieceKind, Square};

/// Why a move or promotion request was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The piece is not standing on the given start square
    #[error("piece {piece} is not on {square}")]
    PieceNotOnSquare { piece: PieceId, square: Square },

    /// Destination is not among the piece's legal destinations
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// A pawn on the last rank must be promoted before anything else moves
    #[error("promotion of {pawn} is pending")]
    PromotionPending { pawn: PieceId },

    /// Promotion requested for a piece that is not the pending pawn
    #[error("no promotion pending for piece {piece}")]
    NoPromotionPending { piece: PieceId },

    /// A pawn may only become a knight, bishop, rook or queen
    #[error("cannot promote to {kind}")]
    InvalidPromotion { kind: PieceKind },
}

/// Why a piece could not be placed while composing a position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("square {square} is already occupied")]
    Occupied { square: Square },

    #[error("{color} already has a king")]
    SecondKing { color: Color },
}
