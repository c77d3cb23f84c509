//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece instead of starting from the
//! standard layout.
//!
//! # Example
//! ```
//! use mini_chess::board::{BoardBuilder, Color, Piece, PieceKind, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Piece::new(PieceKind::King, Color::White))
//!     .piece(e8, Piece::new(PieceKind::King, Color::Black))
//!     .build();
//! assert_eq!(board.pieces().count(), 2);
//! ```

use super::{Board, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a builder for an empty board.
    #[must_use]
    pub const fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder { board: Board::new() }
    }

    /// Place a piece, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.board.set_piece(square, Some(piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set_piece(square, None);
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}
