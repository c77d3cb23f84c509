//! King-safety filter over pseudo-legal moves.
//!
//! Each candidate is tried on the real board through a `TrialMove`, which puts
//! both touched squares back when it goes out of scope.

use super::{Board, Color, Move, Piece, Square};

/// A move temporarily applied to a board.
///
/// Records the occupants of `from` and `to` on creation and restores them on
/// drop, whichever way the scope is left.
pub struct TrialMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    saved_from: Option<Piece>,
    saved_to: Option<Piece>,
}

impl<'a> TrialMove<'a> {
    /// Clear `from` and put its occupant on `to`.
    pub fn apply(board: &'a mut Board, from: Square, to: Square) -> Self {
        let saved_from = board.piece_at(from);
        let saved_to = board.piece_at(to);
        board.set_piece(from, None);
        board.set_piece(to, saved_from);
        TrialMove {
            board,
            from,
            to,
            saved_from,
            saved_to,
        }
    }

    /// The board with the move applied
    #[must_use]
    pub fn board(&self) -> &Board {
        &*self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.set_piece(self.to, self.saved_to);
        self.board.set_piece(self.from, self.saved_from);
    }
}

impl Board {
    /// Legal destinations for the piece on `from` when `side` is to move.
    ///
    /// Empty if `from` is empty or holds a piece of the other color. The board
    /// is unchanged on return.
    pub fn legal_moves(&mut self, from: Square, side: Color) -> Vec<Square> {
        let piece = match self.piece_at(from) {
            Some(piece) if piece.color == side => piece,
            _ => return Vec::new(),
        };

        let mut legal = Vec::new();
        for to in self.pseudo_legal_moves(from, piece) {
            let trial = TrialMove::apply(self, from, to);
            if !trial.board().in_check(side) {
                legal.push(to);
            }
        }
        legal
    }

    /// Every legal move for `side`, origins in rank-major order.
    pub fn all_legal_moves(&mut self, side: Color) -> Vec<Move> {
        let origins: Vec<Square> = self
            .pieces()
            .filter(|&(_, piece)| piece.color == side)
            .map(|(sq, _)| sq)
            .collect();

        let mut moves = Vec::new();
        for from in origins {
            moves.extend(
                self.legal_moves(from, side)
                    .into_iter()
                    .map(|to| Move::new(from, to)),
            );
        }
        moves
    }
}
