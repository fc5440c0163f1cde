use tracing::debug;

use crate::{
    error::{MoveError, SetupError},
    movegen::{pseudo_legal_moves, DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS},
    piece::Piece,
    types::*,
};

/// The most recent committed move, kept for en-passant eligibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastMove {
    pub piece: PieceId,
    pub kind: PieceKind,
    pub start: Square,
    pub end: Square,
}

impl LastMove {
    pub fn is_double_step(&self) -> bool {
        self.kind == PieceKind::Pawn
            && self.start.file == self.end.file
            && self.start.rank.abs_diff(self.end.rank) == 2
    }

    /// Square a double-stepping pawn passed over.
    pub fn skipped_square(&self) -> Option<Square> {
        if !self.is_double_step() {
            return None;
        }
        Some(Square {
            file: self.end.file,
            rank: (self.start.rank + self.end.rank) / 2,
        })
    }
}

/// What a committed move did besides relocating the mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub captured: Option<Piece>,
    pub castled: Option<CastleSide>,
    pub en_passant: bool,
    pub promotion_pending: bool,
}

/// Token returned by [`Board::simulate_move`]; hand it back to
/// [`Board::undo_move`] to restore the board exactly.
#[derive(Clone, Debug)]
#[must_use = "a simulated move must be undone"]
pub struct Simulation {
    moved: Piece,
    end: Square,
    displaced: Option<Piece>,
    en_passant: Option<Piece>,
    rook: Option<(Piece, Square)>,
    last_move: Option<LastMove>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [Option<Piece>; 64],
    king_position: [Option<Square>; 2],
    captured: [Vec<Piece>; 2],
    last_move: Option<LastMove>,
    promotion_pending: Option<PieceId>,
    next_id: u16,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard 32-piece starting layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in Color::ALL {
            for (file, &kind) in back.iter().enumerate() {
                board.put(color, kind, sq(file as u8, color.home_rank()));
            }
            for file in 0..8 {
                board.put(color, PieceKind::Pawn, sq(file, color.pawn_rank()));
            }
        }
        board
    }

    /// A board with no pieces, for composing positions with [`Board::place`].
    ///
    /// Positions meant for play or search need one king per color. A color
    /// without a king is never reported in check, so kingless boards are
    /// only useful for exercising move generation.
    pub fn empty() -> Self {
        Self {
            grid: [None; 64],
            king_position: [None; 2],
            captured: [Vec::new(), Vec::new()],
            last_move: None,
            promotion_pending: None,
            next_id: 0,
        }
    }

    /// Put a fresh, unmoved piece on an empty square.
    pub fn place(
        &mut self,
        color: Color,
        kind: PieceKind,
        square: Square,
    ) -> Result<PieceId, SetupError> {
        if self.grid[square.index()].is_some() {
            return Err(SetupError::Occupied { square });
        }
        if kind == PieceKind::King && self.king_position[color.idx()].is_some() {
            return Err(SetupError::SecondKing { color });
        }
        Ok(self.put(color, kind, square))
    }

    fn put(&mut self, color: Color, kind: PieceKind, square: Square) -> PieceId {
        let id = self.fresh_id();
        self.grid[square.index()] = Some(Piece::new(id, color, kind, square));
        if kind == PieceKind::King {
            self.king_position[color.idx()] = Some(square);
        }
        id
    }

    fn fresh_id(&mut self) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn get_piece_at(&self, square: Square) -> Option<&Piece> {
        self.grid[square.index()].as_ref()
    }

    /// Look a live piece up by identity.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.grid.iter().flatten().find(|p| p.id == id)
    }

    /// Pieces of `color` in scan order (file-major, then rank).
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        Square::all()
            .filter_map(move |s| self.get_piece_at(s))
            .filter(move |p| p.color == color)
    }

    pub fn king_position(&self, color: Color) -> Option<Square> {
        self.king_position[color.idx()]
    }

    /// Pieces of `color` that have been captured, in capture order.
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captured[color.idx()]
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    pub fn promotion_pending(&self) -> Option<&Piece> {
        self.promotion_pending.and_then(|id| self.piece(id))
    }

    /// False for a color without a king; see [`Board::empty`].
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_position(color) {
            Some(k) => self.is_square_attacked(k, color.other()),
            None => false,
        }
    }

    /// True if any piece of `by` attacks `target`, whether or not it is occupied.
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        // Pawns of `by` sit one rank behind the target, from their point of view
        let back = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(s) = target.offset(df, back) {
                if self.holds(s, by, &[PieceKind::Pawn]) {
                    return true;
                }
            }
        }

        for (df, dr) in KNIGHT_OFFSETS {
            if let Some(s) = target.offset(df, dr) {
                if self.holds(s, by, &[PieceKind::Knight]) {
                    return true;
                }
            }
        }

        for (df, dr) in KING_OFFSETS {
            if let Some(s) = target.offset(df, dr) {
                if self.holds(s, by, &[PieceKind::King]) {
                    return true;
                }
            }
        }

        let rays: [(&[(i8, i8)], &[PieceKind]); 2] = [
            (&DIAGONALS, &[PieceKind::Bishop, PieceKind::Queen]),
            (&ORTHOGONALS, &[PieceKind::Rook, PieceKind::Queen]),
        ];
        for (dirs, sliders) in rays {
            for &(df, dr) in dirs {
                let mut cursor = target.offset(df, dr);
                while let Some(s) = cursor {
                    if self.get_piece_at(s).is_some() {
                        if self.holds(s, by, sliders) {
                            return true;
                        }
                        break;
                    }
                    cursor = s.offset(df, dr);
                }
            }
        }

        false
    }

    fn holds(&self, square: Square, color: Color, kinds: &[PieceKind]) -> bool {
        self.get_piece_at(square)
            .is_some_and(|pc| pc.color == color && kinds.contains(&pc.kind))
    }

    // ---------------------------------------------------------------------
    // Legal moves
    // ---------------------------------------------------------------------

    /// Destinations of `piece` that do not leave its own king in check,
    /// including castling and en passant.
    ///
    /// Empty if `piece` is no longer on the square it claims.
    pub fn legal_moves_for(&mut self, piece: &Piece) -> Vec<Square> {
        let piece = match self.get_piece_at(piece.position) {
            Some(p) if p.id == piece.id => *p,
            _ => return Vec::new(),
        };

        let mut candidates = pseudo_legal_moves(self, &piece);
        if piece.is_king() && !piece.has_moved {
            candidates.extend(self.castling_destinations(&piece));
        }
        if piece.is_pawn() {
            if let Some(target) = self.en_passant_target(&piece) {
                candidates.push(target);
            }
        }

        candidates.retain(|&to| {
            let sim = self.simulate_move(piece.id, piece.position, to);
            let safe = !self.is_in_check(piece.color);
            self.undo_move(sim);
            safe
        });
        candidates
    }

    /// Every legal `(piece, destination)` pair for `color`, in scan order.
    pub fn legal_moves_for_player(&mut self, color: Color) -> Vec<Move> {
        let own: Vec<Piece> = self.pieces(color).copied().collect();
        let mut out = Vec::with_capacity(64);
        for piece in own {
            for to in self.legal_moves_for(&piece) {
                out.push(Move::new(piece.id, piece.position, to));
            }
        }
        out
    }

    pub fn has_legal_move(&mut self, color: Color) -> bool {
        let own: Vec<Piece> = self.pieces(color).copied().collect();
        own.iter().any(|p| !self.legal_moves_for(p).is_empty())
    }

    pub fn game_status(&mut self, color: Color) -> GameStatus {
        if self.has_legal_move(color) {
            GameStatus::InProgress
        } else if self.is_in_check(color) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }

    // ---------------------------------------------------------------------
    // Castling and en passant
    // ---------------------------------------------------------------------

    /// Both pieces unmoved on the home rank with nothing between them, the
    /// king not in check and the two squares it crosses not attacked.
    pub fn can_castle(&self, king: &Piece, rook: &Piece) -> bool {
        if king.kind != PieceKind::King
            || rook.kind != PieceKind::Rook
            || king.color != rook.color
            || king.has_moved
            || rook.has_moved
            || king.position.rank != king.color.home_rank()
            || rook.position.rank != king.position.rank
        {
            return false;
        }

        let rank = king.position.rank;
        let (lo, hi) = if rook.position.file < king.position.file {
            (rook.position.file, king.position.file)
        } else {
            (king.position.file, rook.position.file)
        };
        if (lo + 1..hi).any(|file| self.get_piece_at(sq(file, rank)).is_some()) {
            return false;
        }

        if self.is_in_check(king.color) {
            return false;
        }

        let step: i8 = if rook.position.file > king.position.file { 1 } else { -1 };
        let enemy = king.color.other();
        for n in 1..=2 {
            match king.position.offset(step * n, 0) {
                Some(s) if !self.is_square_attacked(s, enemy) => {}
                _ => return false,
            }
        }
        true
    }

    fn castling_destinations(&self, king: &Piece) -> Vec<Square> {
        let rank = king.color.home_rank();
        let mut out = Vec::new();
        for (rook_file, step) in [(7u8, 2i8), (0, -2)] {
            let Some(rook) = self.get_piece_at(sq(rook_file, rank)) else {
                continue;
            };
            if !self.can_castle(king, rook) {
                continue;
            }
            if let Some(to) = king.position.offset(step, 0) {
                if self.get_piece_at(to).is_none() {
                    out.push(to);
                }
            }
        }
        out
    }

    /// Rook start/end squares if `king` moving `start -> end` is a castle.
    fn castle_rook_squares(
        &self,
        king: &Piece,
        start: Square,
        end: Square,
    ) -> Option<(CastleSide, Square, Square)> {
        if !king.is_king() || start.rank != end.rank || start.file.abs_diff(end.file) != 2 {
            return None;
        }
        let (side, rook_file, step) = if end.file > start.file {
            (CastleSide::King, 7, 1)
        } else {
            (CastleSide::Queen, 0, -1)
        };
        let rook_from = sq(rook_file, start.rank);
        let rook_to = start.offset(step, 0)?;
        if self.get_piece_at(rook_to).is_some() {
            return None;
        }
        match self.get_piece_at(rook_from) {
            Some(r) if r.kind == PieceKind::Rook && r.color == king.color => {
                Some((side, rook_from, rook_to))
            }
            _ => None,
        }
    }

    /// The previous move was an enemy double step landing beside `pawn`,
    /// and `target` is the square it skipped.
    pub fn can_en_passant(&self, pawn: &Piece, target: Square) -> bool {
        if !pawn.is_pawn() {
            return false;
        }
        let Some(last) = self.last_move else {
            return false;
        };
        if last.skipped_square() != Some(target) {
            return false;
        }
        match self.get_piece_at(last.end) {
            Some(passed) if passed.id == last.piece && passed.color != pawn.color => {}
            _ => return false,
        }
        pawn.position.rank == last.end.rank && pawn.position.file.abs_diff(last.end.file) == 1
    }

    fn en_passant_target(&self, pawn: &Piece) -> Option<Square> {
        let target = self.last_move?.skipped_square()?;
        self.can_en_passant(pawn, target).then_some(target)
    }

    /// Square of the pawn taken en passant when `piece` goes `start -> end`.
    fn en_passant_victim(&self, piece: &Piece, start: Square, end: Square) -> Option<Square> {
        if !piece.is_pawn() || start.file == end.file || self.get_piece_at(end).is_some() {
            return None;
        }
        let victim = Square {
            file: end.file,
            rank: start.rank,
        };
        match self.get_piece_at(victim) {
            Some(p) if p.is_pawn() && p.color != piece.color => Some(victim),
            _ => None,
        }
    }

    // ---------------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------------

    fn take(&mut self, square: Square) -> Option<Piece> {
        self.grid[square.index()].take()
    }

    fn set(&mut self, piece: Piece) {
        self.grid[piece.position.index()] = Some(piece);
        if piece.is_king() {
            self.king_position[piece.color.idx()] = Some(piece.position);
        }
    }

    /// Move `piece` to `end` and mark it as having moved.
    fn relocate(&mut self, mut piece: Piece, end: Square) -> Piece {
        self.grid[piece.position.index()] = None;
        piece.position = end;
        piece.first_move = false;
        piece.has_moved = true;
        self.set(piece);
        piece
    }

    /// Validated, committing move. See [`Board::apply_move`].
    pub fn try_apply_move(
        &mut self,
        piece: PieceId,
        start: Square,
        end: Square,
    ) -> Result<AppliedMove, MoveError> {
        if let Some(pawn) = self.promotion_pending {
            return Err(MoveError::PromotionPending { pawn });
        }
        let moving = match self.get_piece_at(start) {
            Some(p) if p.id == piece => *p,
            _ => return Err(MoveError::PieceNotOnSquare { piece, square: start }),
        };
        if !self.legal_moves_for(&moving).contains(&end) {
            return Err(MoveError::IllegalMove { from: start, to: end });
        }
        Ok(self.commit_move(moving, start, end))
    }

    /// Commit a move: captures go to the capture lists, castling moves the
    /// rook, and a pawn reaching its last rank waits for [`Board::promote`].
    ///
    /// Returns false if `end` is not a legal destination of `piece`.
    pub fn apply_move(&mut self, piece: PieceId, start: Square, end: Square) -> bool {
        self.try_apply_move(piece, start, end).is_ok()
    }

    fn commit_move(&mut self, moving: Piece, start: Square, end: Square) -> AppliedMove {
        let mut captured = None;
        let mut en_passant = false;

        if let Some(victim_sq) = self.en_passant_victim(&moving, start, end) {
            captured = self.take(victim_sq);
            en_passant = true;
            debug!(from = %start, to = %end, taken = %victim_sq, "en passant");
        }

        let castled = self
            .castle_rook_squares(&moving, start, end)
            .map(|(side, rook_from, rook_to)| {
                if let Some(rook) = self.get_piece_at(rook_from).copied() {
                    self.relocate(rook, rook_to);
                }
                debug!(color = %moving.color, ?side, "castled");
                side
            });

        if let Some(victim) = self.take(end) {
            captured = Some(victim);
        }
        if let Some(victim) = captured {
            self.captured[victim.color.idx()].push(victim);
        }

        let moved = self.relocate(moving, end);
        let promotion_pending = moved.is_pawn() && end.rank == moved.color.promotion_rank();
        if promotion_pending {
            self.promotion_pending = Some(moved.id);
        }

        self.last_move = Some(LastMove {
            piece: moved.id,
            kind: moved.kind,
            start,
            end,
        });

        debug!(
            color = %moved.color,
            kind = %moved.kind,
            from = %start,
            to = %end,
            captured = captured.is_some(),
            "move applied"
        );

        AppliedMove {
            captured,
            castled,
            en_passant,
            promotion_pending,
        }
    }

    /// Replace the pending pawn by a new piece of `kind`.
    pub fn try_promote(&mut self, pawn: PieceId, kind: PieceKind) -> Result<PieceId, MoveError> {
        if !kind.is_promotion_target() {
            return Err(MoveError::InvalidPromotion { kind });
        }
        if self.promotion_pending != Some(pawn) {
            return Err(MoveError::NoPromotionPending { piece: pawn });
        }
        let Some(old) = self.piece(pawn).copied() else {
            return Err(MoveError::NoPromotionPending { piece: pawn });
        };

        let id = self.fresh_id();
        self.set(Piece {
            id,
            color: old.color,
            kind,
            position: old.position,
            first_move: false,
            has_moved: true,
        });
        self.promotion_pending = None;
        debug!(color = %old.color, square = %old.position, %kind, "promoted");
        Ok(id)
    }

    pub fn promote(&mut self, pawn: PieceId, kind: PieceKind) -> bool {
        self.try_promote(pawn, kind).is_ok()
    }

    /// Reversible move for lookahead and legality filtering.
    ///
    /// Replays castling, en passant and (as a queen) promotion, and records
    /// the move as `last_move`, but never touches the capture lists or the
    /// pending-promotion marker. Every call must be paired with
    /// [`Board::undo_move`] before the caller returns.
    ///
    /// # Panics
    /// If `start` is empty.
    pub fn simulate_move(&mut self, piece: PieceId, start: Square, end: Square) -> Simulation {
        let moving = *self
            .get_piece_at(start)
            .expect("simulate_move: no piece on start square");
        debug_assert_eq!(moving.id, piece, "simulate_move: piece is not on start square");

        let en_passant = self
            .en_passant_victim(&moving, start, end)
            .and_then(|s| self.take(s));

        let rook = self
            .castle_rook_squares(&moving, start, end)
            .and_then(|(_, rook_from, rook_to)| {
                let rook = self.get_piece_at(rook_from).copied()?;
                self.relocate(rook, rook_to);
                Some((rook, rook_to))
            });

        let displaced = self.take(end);
        let mut moved = self.relocate(moving, end);
        if moved.is_pawn() && end.rank == moved.color.promotion_rank() {
            moved.kind = PieceKind::Queen;
            self.set(moved);
        }

        let last_move = self.last_move.replace(LastMove {
            piece,
            kind: moving.kind,
            start,
            end,
        });

        Simulation {
            moved: moving,
            end,
            displaced,
            en_passant,
            rook,
            last_move,
        }
    }

    /// Invert a [`Board::simulate_move`]. Tokens must be undone in reverse
    /// order of creation.
    pub fn undo_move(&mut self, sim: Simulation) {
        self.grid[sim.end.index()] = sim.displaced;
        self.set(sim.moved);
        if let Some(pawn) = sim.en_passant {
            self.set(pawn);
        }
        if let Some((rook, rook_to)) = sim.rook {
            self.grid[rook_to.index()] = None;
            self.set(rook);
        }
        self.last_move = sim.last_move;
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
