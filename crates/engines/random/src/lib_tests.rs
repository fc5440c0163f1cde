use super::*;
use chess_core::{sq, PieceKind};

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::with_seed(Color::White, 7);
    let mut board = Board::new();

    let mv = engine.get_move(&mut board).expect("startpos has moves");
    assert!(board.legal_moves_for_player(Color::White).contains(&mv));
}

#[test]
fn random_engine_leaves_board_untouched() {
    let mut engine = RandomEngine::with_seed(Color::Black, 1);
    let mut board = Board::new();
    let before = board.clone();
    engine.search(&mut board);
    assert_eq!(board, before);
}

#[test]
fn random_engine_finds_the_only_movable_piece() {
    // White king on a1 has every flight square covered by the two rooks,
    // so only the knight can move
    let mut board = Board::empty();
    board.place(Color::White, PieceKind::King, sq(0, 0)).unwrap();
    let knight = board.place(Color::White, PieceKind::Knight, sq(7, 7)).unwrap();
    board.place(Color::Black, PieceKind::Rook, sq(1, 7)).unwrap();
    board.place(Color::Black, PieceKind::Rook, sq(7, 1)).unwrap();
    board.place(Color::Black, PieceKind::King, sq(4, 4)).unwrap();
    assert!(!board.is_in_check(Color::White));

    for seed in 0..20 {
        let mut engine = RandomEngine::with_seed(Color::White, seed);
        let mv = engine.get_move(&mut board).expect("knight can move");
        assert_eq!(mv.piece, knight);
    }
}

#[test]
fn random_engine_same_seed_same_move() {
    let mut board = Board::new();
    let a = RandomEngine::with_seed(Color::White, 42).get_move(&mut board);
    let b = RandomEngine::with_seed(Color::White, 42).get_move(&mut board);
    assert_eq!(a, b);
}

#[test]
fn random_engine_handles_checkmate() {
    let mut board = Board::empty();
    board.place(Color::Black, PieceKind::King, sq(7, 7)).unwrap();
    board.place(Color::Black, PieceKind::Pawn, sq(6, 6)).unwrap();
    board.place(Color::Black, PieceKind::Pawn, sq(7, 6)).unwrap();
    board.place(Color::White, PieceKind::Rook, sq(0, 7)).unwrap();
    board.place(Color::White, PieceKind::King, sq(0, 0)).unwrap();

    let mut engine = RandomEngine::with_seed(Color::Black, 3);
    assert_eq!(engine.search(&mut board), SearchResult::no_move(1));
}

#[test]
fn random_engine_handles_stalemate() {
    let mut board = Board::empty();
    board.place(Color::Black, PieceKind::King, sq(0, 7)).unwrap();
    board.place(Color::White, PieceKind::Queen, sq(1, 5)).unwrap();
    board.place(Color::White, PieceKind::King, sq(2, 6)).unwrap();

    let mut engine = RandomEngine::new(Color::Black);
    assert!(engine.get_move(&mut board).is_none());
}
