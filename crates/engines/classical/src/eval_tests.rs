use super::*;
use chess_core::sq;

const EPS: f64 = 1e-9;

fn kings(white: Square, black: Square) -> Board {
    let mut board = Board::empty();
    board.place(Color::White, PieceKind::King, white).unwrap();
    board.place(Color::Black, PieceKind::King, black).unwrap();
    board
}

fn style_delta(board: &mut Board, style: EvalStyle, perspective: Color) -> f64 {
    Evaluator::new(style).score(board, perspective) - Evaluator::default().score(board, perspective)
}

#[test]
fn test_start_position_is_balanced() {
    let mut board = Board::new();
    for style in [EvalStyle::Standard, EvalStyle::Aggressive, EvalStyle::Defensive] {
        let eval = Evaluator::new(style);
        let white = eval.score(&mut board, Color::White);
        let black = eval.score(&mut board, Color::Black);
        assert!((white - black).abs() < EPS, "{style:?}: {white} vs {black}");
    }
    assert!(Evaluator::default().score(&mut board, Color::White).abs() < EPS);
}

#[test]
fn test_positional_tables_are_mirrored() {
    // rows are indexed from the owner's home rank
    assert!((positional_bonus(PieceKind::Pawn, Color::White, sq(3, 3)) - 0.25).abs() < EPS);
    assert!((positional_bonus(PieceKind::Pawn, Color::Black, sq(3, 4)) - 0.25).abs() < EPS);
    // unmoved e-pawns sit on the 50 row
    assert!((positional_bonus(PieceKind::Pawn, Color::White, sq(4, 1)) - 0.5).abs() < EPS);
    assert!((positional_bonus(PieceKind::Pawn, Color::Black, sq(4, 6)) - 0.5).abs() < EPS);
    // kings on their home squares are penalised
    assert!((positional_bonus(PieceKind::King, Color::White, sq(4, 0)) + 0.5).abs() < EPS);
    assert!((positional_bonus(PieceKind::King, Color::Black, sq(4, 7)) + 0.5).abs() < EPS);
    // and rewarded on the far rank
    assert!((positional_bonus(PieceKind::King, Color::White, sq(6, 7)) - 0.3).abs() < EPS);
    assert!((positional_bonus(PieceKind::Knight, Color::Black, sq(0, 7)) + 0.5).abs() < EPS);
}

#[test]
fn test_standard_score_is_antisymmetric() {
    let mut board = kings(sq(4, 0), sq(4, 7));
    board.place(Color::White, PieceKind::Queen, sq(3, 0)).unwrap();
    board.place(Color::Black, PieceKind::Knight, sq(1, 7)).unwrap();
    board.place(Color::Black, PieceKind::Pawn, sq(5, 6)).unwrap();

    let eval = Evaluator::default();
    let white = eval.score(&mut board, Color::White);
    let black = eval.score(&mut board, Color::Black);
    assert!((white + black).abs() < EPS);
    assert!(white > 4.0, "white is up a queen for a knight and pawn: {white}");
}

#[test]
fn test_material_dominates_extra_queen() {
    let mut board = kings(sq(4, 0), sq(4, 7));
    board.place(Color::Black, PieceKind::Queen, sq(3, 7)).unwrap();
    let eval = Evaluator::default();
    assert!(eval.score(&mut board, Color::White) < -8.0);
    assert!(eval.score(&mut board, Color::Black) > 8.0);
}

#[test]
fn test_check_term() {
    // Black king on e8 checked by the rook on e1
    let mut board = kings(sq(0, 0), sq(4, 7));
    board.place(Color::White, PieceKind::Rook, sq(4, 0)).unwrap();
    assert!(board.is_in_check(Color::Black));

    let without_check = EvalWeights {
        check: 0.0,
        ..EvalWeights::default()
    };
    let plain = Evaluator::with_weights(EvalStyle::Standard, without_check);
    let full = Evaluator::default();

    let white_delta = full.score(&mut board, Color::White) - plain.score(&mut board, Color::White);
    let black_delta = full.score(&mut board, Color::Black) - plain.score(&mut board, Color::Black);
    assert!((white_delta - 0.5).abs() < EPS);
    assert!((black_delta + 0.5).abs() < EPS);
}

#[test]
fn test_mobility_term() {
    // Lone kings in the corner vs the center: 3 moves vs 8
    let mut board = kings(sq(0, 0), sq(4, 4));
    let mobility_only = EvalWeights {
        mobility: 1.0,
        ..EvalWeights::default()
    };
    let with = Evaluator::with_weights(EvalStyle::Standard, mobility_only);
    let without = Evaluator::with_weights(
        EvalStyle::Standard,
        EvalWeights {
            mobility: 0.0,
            ..EvalWeights::default()
        },
    );
    let delta = with.score(&mut board, Color::White) - without.score(&mut board, Color::White);
    assert!((delta - (3.0 - 8.0)).abs() < EPS);
}

#[test]
fn test_aggressive_rewards_center_and_attacks() {
    let mut board = kings(sq(0, 0), sq(7, 7));
    board.place(Color::White, PieceKind::Knight, sq(3, 3)).unwrap();
    assert!((style_delta(&mut board, EvalStyle::Aggressive, Color::White) - 0.2).abs() < EPS);

    // Knight on d4 now also bears on the rook on f5
    board.place(Color::Black, PieceKind::Rook, sq(5, 4)).unwrap();
    assert!((style_delta(&mut board, EvalStyle::Aggressive, Color::White) - 0.25).abs() < EPS);
}

#[test]
fn test_defensive_rewards_shelter_and_defended_majors() {
    let mut board = kings(sq(4, 0), sq(4, 7));
    board.place(Color::White, PieceKind::Rook, sq(3, 0)).unwrap();
    board.place(Color::White, PieceKind::Pawn, sq(4, 1)).unwrap();

    // two pieces around the king, and the rook has neighbours
    let delta = style_delta(&mut board, EvalStyle::Defensive, Color::White);
    assert!((delta - 0.3).abs() < EPS, "{delta}");
}

#[test]
fn test_defensive_doubles_check_penalty() {
    let mut board = kings(sq(4, 0), sq(0, 7));
    board.place(Color::Black, PieceKind::Rook, sq(4, 7)).unwrap();
    assert!(board.is_in_check(Color::White));

    let delta = style_delta(&mut board, EvalStyle::Defensive, Color::White);
    assert!((delta + 0.5).abs() < EPS, "{delta}");
}

#[test]
fn test_score_leaves_board_untouched() {
    let mut board = Board::new();
    assert!(board.apply_move(board.get_piece_at(sq(4, 1)).unwrap().id, sq(4, 1), sq(4, 3)));
    let before = board.clone();
    for style in [EvalStyle::Standard, EvalStyle::Aggressive, EvalStyle::Defensive] {
        Evaluator::new(style).score(&mut board, Color::Black);
    }
    assert_eq!(board, before);
}
