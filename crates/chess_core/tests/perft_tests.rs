use rayon::prelude::*;

use chess_core::{perft, sq, Board, Color, PieceKind};

/// Position 3 from the chessprogramming wiki perft suite, composed by hand:
/// white Ka5 Rb4 Pb5 Pe2 Pg2, black Kh4 Rh5 Pc7 Pd6 Pf4.
fn position_three() -> Board {
    let mut board = Board::empty();
    let pieces = [
        (Color::White, PieceKind::King, sq(0, 4)),
        (Color::White, PieceKind::Rook, sq(1, 3)),
        (Color::White, PieceKind::Pawn, sq(1, 4)),
        (Color::White, PieceKind::Pawn, sq(4, 1)),
        (Color::White, PieceKind::Pawn, sq(6, 1)),
        (Color::Black, PieceKind::King, sq(7, 3)),
        (Color::Black, PieceKind::Rook, sq(7, 4)),
        (Color::Black, PieceKind::Pawn, sq(2, 6)),
        (Color::Black, PieceKind::Pawn, sq(3, 5)),
        (Color::Black, PieceKind::Pawn, sq(5, 3)),
    ];
    for (color, kind, square) in pieces {
        board.place(color, kind, square).unwrap();
    }
    board
}

#[test]
fn perft_startpos() {
    let cases: [(u8, u64); 4] = [(1, 20), (2, 400), (3, 8_902), (4, 197_281)];
    cases.par_iter().for_each(|&(depth, expected)| {
        let mut board = Board::new();
        let before = board.clone();
        let nodes = perft(&mut board, Color::White, depth);
        assert_eq!(nodes, expected, "startpos depth {depth}");
        assert_eq!(board, before, "perft must leave the board untouched");
    });
}

#[test]
fn perft_position_three() {
    // Depth 2 contains an en passant capture that would expose the black
    // king along the fourth rank; it must be filtered out.
    let cases: [(u8, u64); 3] = [(1, 14), (2, 191), (3, 2_812)];
    cases.par_iter().for_each(|&(depth, expected)| {
        let mut board = position_three();
        let nodes = perft(&mut board, Color::White, depth);
        assert_eq!(nodes, expected, "position 3 depth {depth}");
    });
}

#[test]
fn perft_depth_zero_is_one() {
    let mut board = Board::new();
    assert_eq!(perft(&mut board, Color::Black, 0), 1);
}
