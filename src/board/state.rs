use std::fmt;

use super::{Color, Piece, PieceKind, Square};

/// 8x8 grid of optional pieces, indexed `[rank][file]`.
///
/// The board owns no rules; legality lives in `attacks`, `movegen` and
/// `legality`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in Color::BOTH {
            let back = color.back_rank();
            let pawns = color.pawn_start_rank();
            for (file, kind) in (0u8..).zip(back_rank) {
                board.cells[back as usize][file as usize] = Some(Piece::new(kind, color));
                board.cells[pawns as usize][file as usize] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.rank() as usize][sq.file() as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.rank() as usize][sq.file() as usize] = piece;
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Occupant's color, if any
    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    /// Raw grid, `cells()[rank][file]`
    #[must_use]
    pub fn cells(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.cells
    }

    /// Occupied squares in rank-major, file-minor order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank 8 at the top, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self.cells[rank][file].map_or('.', Piece::to_fen_char);
                write!(f, "{c}")?;
                if file < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
