pub mod board;
pub mod game;
pub mod protocol;
pub mod session;

pub use board::{Board, Color, Move, MoveError, Piece, PieceKind, Square};
pub use game::{Game, GameSnapshot};
pub use session::SharedGame;
