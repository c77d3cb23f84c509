//! Attack detection.
//!
//! Answers "can a piece of this color reach that square", ignoring whether the
//! move would be legal. The target's own occupant never matters.

use super::{Board, Color, Piece, PieceKind, Square};

impl Board {
    /// True if any piece of `by` attacks `target`.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        self.pieces()
            .filter(|&(_, piece)| piece.color == by)
            .any(|(from, piece)| self.piece_attacks(from, piece, target))
    }

    /// First king of `color` in rank-major, file-minor order.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, piece)| piece == Piece::new(PieceKind::King, color))
            .map(|(sq, _)| sq)
    }

    /// True if `color`'s king is attacked. A board without that king is never in check.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => false,
        }
    }

    /// Whether `piece` standing on `from` attacks `target`.
    pub(crate) fn piece_attacks(&self, from: Square, piece: Piece, target: Square) -> bool {
        if from == target {
            return false;
        }
        let df = target.file() as i8 - from.file() as i8;
        let dr = target.rank() as i8 - from.rank() as i8;
        let straight = df == 0 || dr == 0;
        let diagonal = df.abs() == dr.abs();

        let reaches = match piece.kind {
            PieceKind::Pawn => dr == piece.color.pawn_direction() && df.abs() == 1,
            PieceKind::Knight => matches!((df.abs(), dr.abs()), (1, 2) | (2, 1)),
            PieceKind::King => df.abs() <= 1 && dr.abs() <= 1,
            PieceKind::Rook => straight,
            PieceKind::Bishop => diagonal,
            PieceKind::Queen => straight || diagonal,
        };
        reaches && (!piece.kind.is_slider() || self.path_clear(from, target))
    }

    /// Every square strictly between `from` and `target` is empty.
    /// Callers guarantee the two squares share a line.
    fn path_clear(&self, from: Square, target: Square) -> bool {
        let df = (target.file() as i8 - from.file() as i8).signum();
        let dr = (target.rank() as i8 - from.rank() as i8).signum();
        let mut next = from.offset(df, dr);
        while let Some(sq) = next {
            if sq == target {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
            next = sq.offset(df, dr);
        }
        false
    }
}
