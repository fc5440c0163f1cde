use crate::types::{Color, PieceId, PieceKind, Square};

/// A piece as stored in a board cell.
///
/// The grid owns pieces by value; `position` always mirrors the cell the
/// piece occupies. `first_move` only matters for pawns (double step) and
/// `has_moved` only for kings and rooks (castling).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub kind: PieceKind,
    pub position: Square,
    pub first_move: bool,
    pub has_moved: bool,
}

impl Piece {
    pub(crate) fn new(id: PieceId, color: Color, kind: PieceKind, position: Square) -> Self {
        Self {
            id,
            color,
            kind,
            position,
            first_move: kind == PieceKind::Pawn && position.rank == color.pawn_rank(),
            has_moved: false,
        }
    }

    pub fn is_pawn(&self) -> bool {
        self.kind == PieceKind::Pawn
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }
}
