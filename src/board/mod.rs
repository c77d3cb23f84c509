//! Board representation and move rules.
//!
//! A plain 8x8 grid plus the three rule layers built on it: attack detection,
//! pseudo-legal move generation and the king-safety filter. Castling, en
//! passant and promotion are not part of these rules.
//!
//! # Example
//! ```
//! use mini_chess::board::{Board, Color, Square};
//!
//! let mut board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! let moves = board.legal_moves(e2, Color::White);
//! assert_eq!(moves.len(), 2);
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod error;
mod fen;
mod legality;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, MoveParseError, PieceParseError, PlacementError, SquareError};
pub use legality::TrialMove;
pub use state::Board;
pub use types::{Color, Move, Piece, PieceKind, Square};
