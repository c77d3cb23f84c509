use super::error::PlacementError;
use super::{Board, Piece, Square};

impl Board {
    /// Parse the piece-placement field of a FEN string (rank 8 first).
    ///
    /// Only the placement is read; this board has no side-to-move, castling or
    /// en passant state.
    pub fn try_from_placement(placement: &str) -> Result<Self, PlacementError> {
        let mut board = Board::empty();
        let ranks: Vec<&str> = placement.trim().split('/').collect();

        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            let mut after_digit = false;
            for c in rank_str.chars() {
                // A run of empty squares is a single digit 1-8
                if matches!(c, '1'..='8') && !after_digit {
                    file += c as usize - '0' as usize;
                    after_digit = true;
                    continue;
                }
                after_digit = false;
                let piece =
                    Piece::from_fen_char(c).map_err(|_| PlacementError::InvalidPiece { char: c })?;
                let sq = Square::new(file as u8, rank).ok_or(PlacementError::TooManyFiles {
                    rank: rank_idx,
                    files: file + 1,
                })?;
                board.set_piece(sq, Some(piece));
                file += 1;
            }
            if file > 8 {
                return Err(PlacementError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
            if file < 8 {
                return Err(PlacementError::TooFewFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        Ok(board)
    }

    /// Parse a placement string.
    ///
    /// # Panics
    /// Panics if the placement is invalid. Use `try_from_placement` for fallible parsing.
    #[must_use]
    pub fn from_placement(placement: &str) -> Self {
        Self::try_from_placement(placement).expect("Invalid placement string")
    }

    /// Piece-placement field of FEN for this board.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8u8 {
                match Square::new(file, rank).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}
