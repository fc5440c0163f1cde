//! Static position evaluation
//!
//! Scores are plain pawn units (pawn = 1.0) from a fixed perspective:
//! positive means the perspective side is better off. Material and a
//! piece-square bonus are summed for every piece, then mobility and check
//! terms are added. The aggressive and defensive styles layer extra terms on
//! top of that baseline.

use chess_core::{pseudo_legal_moves, Board, Color, PieceKind, Square};
use serde::{Deserialize, Serialize};

/// Material values in pawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [f64; 6] = [1.0, 3.0, 3.0, 5.0, 9.0, 100.0];

const CENTER: [Square; 4] = [
    Square { file: 3, rank: 3 },
    Square { file: 3, rank: 4 },
    Square { file: 4, rank: 3 },
    Square { file: 4, rank: 4 },
];

// Piece-square tables in centipawns. White reads row `rank` and Black row
// `7 - rank`, so row 0 is the owner's home rank even though the rows are
// laid out as if seen from the far side.
#[rustfmt::skip]
const PAWN_TABLE: [[i32; 8]; 8] = [
    [  0,  0,  0,  0,  0,  0,  0,  0],
    [ 50, 50, 50, 50, 50, 50, 50, 50],
    [ 10, 10, 20, 30, 30, 20, 10, 10],
    [  5,  5, 10, 25, 25, 10,  5,  5],
    [  0,  0,  0, 20, 20,  0,  0,  0],
    [  5, -5,-10,  0,  0,-10, -5,  5],
    [  5, 10, 10,-20,-20, 10, 10,  5],
    [  0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  0,  0,  0,-20,-40],
    [-30,  0, 10, 15, 15, 10,  0,-30],
    [-30,  5, 15, 20, 20, 15,  5,-30],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-30,  5, 10, 15, 15, 10,  5,-30],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

#[rustfmt::skip]
const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20,-10,-10,-10,-10,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5, 10, 10,  5,  0,-10],
    [-10,  5,  5, 10, 10,  5,  5,-10],
    [-10,  0, 10, 10, 10, 10,  0,-10],
    [-10, 10, 10, 10, 10, 10, 10,-10],
    [-10,  5,  0,  0,  0,  0,  5,-10],
    [-20,-10,-10,-10,-10,-10,-10,-20],
];

#[rustfmt::skip]
const ROOK_TABLE: [[i32; 8]; 8] = [
    [  0,  0,  0,  0,  0,  0,  0,  0],
    [  5, 10, 10, 10, 10, 10, 10,  5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [  0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20,-10,-10, -5, -5,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5,  5,  5,  5,  0,-10],
    [ -5,  0,  5,  5,  5,  5,  0, -5],
    [  0,  0,  5,  5,  5,  5,  0, -5],
    [-10,  5,  5,  5,  5,  5,  0,-10],
    [-10,  0,  5,  0,  0,  0,  0,-10],
    [-20,-10,-10, -5, -5,-10,-10,-20],
];

#[rustfmt::skip]
const KING_TABLE: [[i32; 8]; 8] = [
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-20,-30,-30,-40,-40,-30,-30,-20],
    [-10,-20,-20,-20,-20,-20,-20,-10],
    [ 20, 20,  0,  0,  0,  0, 20, 20],
    [ 20, 30, 10,  0,  0, 10, 30, 20],
];

const PIECE_TABLES: [&[[i32; 8]; 8]; 6] = [
    &PAWN_TABLE,
    &KNIGHT_TABLE,
    &BISHOP_TABLE,
    &ROOK_TABLE,
    &QUEEN_TABLE,
    &KING_TABLE,
];

/// Material value of a piece kind in pawns.
pub fn piece_value(kind: PieceKind) -> f64 {
    PIECE_VALUES[kind.idx()]
}

/// Piece-square bonus in pawns for `kind` of `color` standing on `square`.
///
/// Both colors get the same bonus on mirrored squares. With the home rank
/// on row 0, unmoved pawns score high and a king on its back rank scores low.
pub fn positional_bonus(kind: PieceKind, color: Color, square: Square) -> f64 {
    let row = match color {
        Color::White => square.rank as usize,
        Color::Black => 7 - square.rank as usize,
    };
    PIECE_TABLES[kind.idx()][row][square.file as usize] as f64 / 100.0
}

/// Which extra terms the evaluator layers on the baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvalStyle {
    #[default]
    Standard,
    /// Rewards center occupation and pieces bearing on enemy pieces.
    Aggressive,
    /// Rewards pieces around the king and defended rooks/queens.
    Defensive,
}

/// Tunable weights of the non-material terms. Every field falls back to its
/// default when missing from a config file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub mobility: f64,
    pub check: f64,
    pub center: f64,
    pub attack: f64,
    pub king_shelter: f64,
    pub defended_major: f64,
    /// Applied by the defensive style on top of `check`.
    pub defensive_check_penalty: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            mobility: 0.1,
            check: 0.5,
            center: 0.2,
            attack: 0.05,
            king_shelter: 0.1,
            defended_major: 0.1,
            defensive_check_penalty: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Evaluator {
    pub style: EvalStyle,
    pub weights: EvalWeights,
}

impl Evaluator {
    pub fn new(style: EvalStyle) -> Self {
        Self {
            style,
            weights: EvalWeights::default(),
        }
    }

    pub fn with_weights(style: EvalStyle, weights: EvalWeights) -> Self {
        Self { style, weights }
    }

    /// Scores `board` for `perspective`.
    ///
    /// Takes the board mutably because mobility counts legal moves, which
    /// runs the simulate/undo filter; the board is unchanged on return.
    pub fn score(&self, board: &mut Board, perspective: Color) -> f64 {
        let enemy = perspective.other();
        let w = &self.weights;

        let mut score = material_and_position(board, perspective);

        let own_moves = board.legal_moves_for_player(perspective).len() as f64;
        let enemy_moves = board.legal_moves_for_player(enemy).len() as f64;
        score += (own_moves - enemy_moves) * w.mobility;

        if board.is_in_check(perspective) {
            score -= w.check;
        }
        if board.is_in_check(enemy) {
            score += w.check;
        }

        match self.style {
            EvalStyle::Standard => score,
            EvalStyle::Aggressive => score + self.aggressive_terms(board, perspective),
            EvalStyle::Defensive => score + self.defensive_terms(board, perspective),
        }
    }

    fn aggressive_terms(&self, board: &Board, perspective: Color) -> f64 {
        let occupied_center = CENTER
            .iter()
            .filter(|&&s| board.get_piece_at(s).is_some_and(|p| p.color == perspective))
            .count();

        let attacks: usize = board
            .pieces(perspective)
            .map(|piece| {
                pseudo_legal_moves(board, piece)
                    .into_iter()
                    .filter(|&s| {
                        board
                            .get_piece_at(s)
                            .is_some_and(|p| p.color != perspective)
                    })
                    .count()
            })
            .sum();

        occupied_center as f64 * self.weights.center + attacks as f64 * self.weights.attack
    }

    fn defensive_terms(&self, board: &Board, perspective: Color) -> f64 {
        let mut score = 0.0;

        if board.is_in_check(perspective) {
            score -= self.weights.defensive_check_penalty;
        }

        if let Some(king) = board.king_position(perspective) {
            score += friendly_neighbours(board, king, perspective) as f64 * self.weights.king_shelter;
        }

        let defended = board
            .pieces(perspective)
            .filter(|p| p.kind.is_major())
            .filter(|p| friendly_neighbours(board, p.position, perspective) > 0)
            .count();
        score + defended as f64 * self.weights.defended_major
    }
}

/// Material plus piece-square bonus, own pieces minus enemy pieces.
fn material_and_position(board: &Board, perspective: Color) -> f64 {
    Square::all()
        .filter_map(|s| board.get_piece_at(s))
        .map(|p| {
            let value = piece_value(p.kind) + positional_bonus(p.kind, p.color, p.position);
            if p.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

fn friendly_neighbours(board: &Board, square: Square, color: Color) -> usize {
    (-1i8..=1)
        .flat_map(|df| (-1i8..=1).map(move |dr| (df, dr)))
        .filter(|&d| d != (0, 0))
        .filter_map(|(df, dr)| square.offset(df, dr))
        .filter(|&s| board.get_piece_at(s).is_some_and(|p| p.color == color))
        .count()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
