//! Pseudo-legal move rules, one pure function per piece kind.
//!
//! Nothing here looks at whether the mover's own king ends up in check;
//! that filter lives on [`Board::legal_moves_for`].

use crate::{board::Board, piece::Piece, types::*};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Destinations `piece` could reach by its movement pattern alone.
pub fn pseudo_legal_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    pseudo_legal_moves_into(board, piece, &mut out);
    out
}

/// Same as [`pseudo_legal_moves`], appending into a reusable buffer.
pub fn pseudo_legal_moves_into(board: &Board, piece: &Piece, out: &mut Vec<Square>) {
    match piece.kind {
        PieceKind::Pawn => gen_pawn(board, piece, out),
        PieceKind::Knight => gen_leaper(board, piece, &KNIGHT_OFFSETS, out),
        PieceKind::King => gen_leaper(board, piece, &KING_OFFSETS, out),
        PieceKind::Bishop => gen_slider(board, piece, &DIAGONALS, out),
        PieceKind::Rook => gen_slider(board, piece, &ORTHOGONALS, out),
        PieceKind::Queen => {
            gen_slider(board, piece, &DIAGONALS, out);
            gen_slider(board, piece, &ORTHOGONALS, out);
        }
    }
}

fn gen_pawn(board: &Board, piece: &Piece, out: &mut Vec<Square>) {
    let dir = piece.color.pawn_direction();
    let from = piece.position;

    // forward 1, then forward 2 only through an empty square
    if let Some(one) = from.offset(0, dir) {
        if board.get_piece_at(one).is_none() {
            out.push(one);
            if piece.first_move {
                if let Some(two) = from.offset(0, 2 * dir) {
                    if board.get_piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    // diagonal captures
    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir) {
            if let Some(target) = board.get_piece_at(to) {
                if target.color != piece.color {
                    out.push(to);
                }
            }
        }
    }
}

fn gen_leaper(board: &Board, piece: &Piece, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(df, dr) in offsets {
        if let Some(to) = piece.position.offset(df, dr) {
            match board.get_piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != piece.color => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, piece: &Piece, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(df, dr) in dirs {
        let mut cursor = piece.position.offset(df, dr);
        while let Some(to) = cursor {
            match board.get_piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != piece.color => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cursor = to.offset(df, dr);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
