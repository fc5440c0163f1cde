use crate::{board::Board, types::Color};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, with
/// `color` to move first. The board is walked with simulate/undo and comes
/// back unchanged.
pub fn perft(board: &mut Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves_for_player(color);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let sim = board.simulate_move(mv.piece, mv.from, mv.to);
        nodes += perft(board, color.other(), depth - 1);
        board.undo_move(sim);
    }
    nodes
}
