//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - piece kinds, colors and colored pieces
//! - `Square` - a bounds-checked (file, rank) pair
//! - `Move` - an origin/destination pair, printed as `e2-e4`

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
