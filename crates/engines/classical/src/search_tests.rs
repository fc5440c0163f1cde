use super::*;
use crate::EvalStyle;
use chess_core::{sq, PieceKind, Square};

const EPS: f64 = 1e-9;

fn place(board: &mut Board, color: Color, kind: PieceKind, square: Square) {
    board.place(color, kind, square).unwrap();
}

/// Castled kings, a rook and minor piece each, and three pawns in front.
fn sparse_middlegame() -> Board {
    let mut board = Board::empty();
    place(&mut board, Color::White, PieceKind::King, sq(6, 0));
    place(&mut board, Color::White, PieceKind::Rook, sq(0, 0));
    place(&mut board, Color::White, PieceKind::Knight, sq(2, 2));
    place(&mut board, Color::Black, PieceKind::King, sq(6, 7));
    place(&mut board, Color::Black, PieceKind::Rook, sq(3, 7));
    place(&mut board, Color::Black, PieceKind::Bishop, sq(2, 4));
    for file in 5..8 {
        place(&mut board, Color::White, PieceKind::Pawn, sq(file, 1));
        place(&mut board, Color::Black, PieceKind::Pawn, sq(file, 6));
    }
    board
}

fn hanging_queen() -> Board {
    let mut board = Board::empty();
    place(&mut board, Color::White, PieceKind::King, sq(4, 0));
    place(&mut board, Color::White, PieceKind::Rook, sq(3, 0));
    place(&mut board, Color::Black, PieceKind::Queen, sq(3, 4));
    place(&mut board, Color::Black, PieceKind::King, sq(7, 7));
    board
}

fn value(outcome: &SearchOutcome) -> f64 {
    outcome.best_move.expect("side has legal moves").1
}

#[test]
fn test_minimax_start_position() {
    let mut board = Board::new();
    let before = board.clone();
    let outcome = minimax_root(&mut board, Color::White, 1, &Evaluator::default());
    assert!(outcome.best_move.is_some());
    assert_eq!(outcome.nodes, 20);
    assert_eq!(board, before);
}

#[test]
fn test_alpha_beta_matches_minimax_value_start_position() {
    let eval = Evaluator::default();
    for depth in 1..=2 {
        let mut board = Board::new();
        let mm = minimax_root(&mut board, Color::White, depth, &eval);
        let ab = alpha_beta_root(&mut board, Color::White, depth, &eval);
        assert!((value(&mm) - value(&ab)).abs() < EPS, "depth {depth}");
        assert!(ab.nodes <= mm.nodes);
    }
}

#[test]
fn test_alpha_beta_matches_minimax_value_sparse() {
    for style in [EvalStyle::Standard, EvalStyle::Aggressive, EvalStyle::Defensive] {
        let eval = Evaluator::new(style);
        for color in Color::ALL {
            let mut board = sparse_middlegame();
            let before = board.clone();
            let mm = minimax_root(&mut board, color, 3, &eval);
            let ab = alpha_beta_root(&mut board, color, 3, &eval);
            assert!((value(&mm) - value(&ab)).abs() < EPS, "{style:?} {color}");
            assert!(ab.nodes < mm.nodes, "{style:?} {color}: pruning never kicked in");
            assert_eq!(board, before);
        }
    }
}

#[test]
fn test_takes_hanging_queen() {
    let eval = Evaluator::default();
    for depth in 1..=2 {
        let mut board = hanging_queen();
        let (mv, score) = minimax_root(&mut board, Color::White, depth, &eval)
            .best_move
            .unwrap();
        assert_eq!((mv.from, mv.to), (sq(3, 0), sq(3, 4)), "depth {depth}");
        assert!(score > 0.0);

        let (mv, _) = alpha_beta_root(&mut board, Color::White, depth, &eval)
            .best_move
            .unwrap();
        assert_eq!((mv.from, mv.to), (sq(3, 0), sq(3, 4)), "depth {depth}");
    }
}

#[test]
fn test_no_move_when_mated() {
    let mut board = Board::empty();
    place(&mut board, Color::Black, PieceKind::King, sq(7, 7));
    place(&mut board, Color::Black, PieceKind::Pawn, sq(6, 6));
    place(&mut board, Color::Black, PieceKind::Pawn, sq(7, 6));
    place(&mut board, Color::White, PieceKind::Rook, sq(0, 7));
    place(&mut board, Color::White, PieceKind::King, sq(0, 0));

    let eval = Evaluator::default();
    let outcome = minimax_root(&mut board, Color::Black, 2, &eval);
    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.nodes, 0);
    assert_eq!(alpha_beta_root(&mut board, Color::Black, 3, &eval).best_move, None);
}

#[test]
fn test_no_move_when_stalemated() {
    let mut board = Board::empty();
    place(&mut board, Color::Black, PieceKind::King, sq(0, 7));
    place(&mut board, Color::White, PieceKind::Queen, sq(1, 5));
    place(&mut board, Color::White, PieceKind::King, sq(2, 6));

    let outcome = alpha_beta_root(&mut board, Color::Black, 3, &Evaluator::default());
    assert_eq!(outcome.best_move, None);
}

#[test]
fn test_childless_node_scores_zero() {
    // Rook to a8 mates, but the mated side has no replies so the line
    // scores a flat 0 at depth 2
    let mut board = Board::empty();
    place(&mut board, Color::Black, PieceKind::King, sq(7, 7));
    place(&mut board, Color::Black, PieceKind::Pawn, sq(6, 6));
    place(&mut board, Color::Black, PieceKind::Pawn, sq(7, 6));
    place(&mut board, Color::White, PieceKind::Rook, sq(0, 0));
    place(&mut board, Color::White, PieceKind::King, sq(4, 0));
    let rook = board.get_piece_at(sq(0, 0)).unwrap().id;

    let eval = Evaluator::default();
    let sim = board.simulate_move(rook, sq(0, 0), sq(0, 7));
    let mut search = Search::new(Color::White, &eval);
    assert_eq!(search.minimax(&mut board, 1, false), 0.0);
    assert_eq!(
        search.alpha_beta(&mut board, 1, f64::NEG_INFINITY, f64::INFINITY, false),
        0.0
    );
    board.undo_move(sim);
}

#[test]
fn test_zero_depth_searches_one_ply() {
    let eval = Evaluator::default();
    let mut board = Board::new();
    let zero = minimax_root(&mut board, Color::White, 0, &eval);
    let one = minimax_root(&mut board, Color::White, 1, &eval);
    assert_eq!(zero, one);
}

#[test]
fn test_search_is_deterministic() {
    let eval = Evaluator::new(EvalStyle::Aggressive);
    let mut board = sparse_middlegame();
    let a = alpha_beta_root(&mut board, Color::Black, 2, &eval);
    let b = alpha_beta_root(&mut board, Color::Black, 2, &eval);
    assert_eq!(a, b);
}
