//! Game state: side to move, the move log and the move executor.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Move, MoveError, Piece, Square};

/// One game in progress.
///
/// Owns its board exclusively. There is no terminal state: a position with no
/// legal moves for the side to move is not flagged.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<Move>,
}

/// Board state as reported to callers outside the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameSnapshot {
    pub side_to_move: Color,
    /// Whether the side to move is in check
    pub in_check: bool,
    pub white_in_check: bool,
    pub black_in_check: bool,
    /// `cells[rank][file]`
    pub cells: [[Option<Piece>; 8]; 8],
}

impl Game {
    /// Standard starting position, White to move, empty log.
    #[must_use]
    pub fn new() -> Self {
        Game::from_position(Board::new(), Color::White)
    }

    /// Start from an arbitrary position with an empty log.
    #[must_use]
    pub fn from_position(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up test positions. Changes made here
    /// bypass the move log and the side to move.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Put `piece` on `square` (or empty it) without making a move.
    pub fn place_piece(&mut self, square: Square, piece: Option<Piece>) {
        log::info!(
            "placing {} on {square}",
            piece.map_or_else(|| "nothing".to_string(), |p| p.to_string())
        );
        self.board.set_piece(square, piece);
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Move log in `e2-e4` notation. Each call returns a fresh copy.
    #[must_use]
    pub fn moves(&self) -> Vec<String> {
        self.history.iter().map(Move::to_string).collect()
    }

    /// Move log as structured moves.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Legal destinations from `from` for the side to move. Empty when `from`
    /// is empty or holds an opposing piece.
    pub fn legal_moves_from(&mut self, from: Square) -> Vec<Square> {
        self.board.legal_moves(from, self.side_to_move)
    }

    /// Play `from`-`to` for the side to move.
    ///
    /// Whatever stands on `to` is overwritten. On error nothing changes.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        if !self.legal_moves_from(from).contains(&to) {
            log::warn!("rejected {from}-{to} for {}", self.side_to_move);
            return Err(MoveError::IllegalMove { from, to });
        }

        let mv = Move::new(from, to);
        let piece = self.board.piece_at(from);
        self.board.set_piece(from, None);
        self.board.set_piece(to, piece);
        self.history.push(mv);
        self.side_to_move = self.side_to_move.opponent();
        log::debug!("played {mv}, {} to move", self.side_to_move);
        Ok(mv)
    }

    /// Replace the whole game with a fresh one.
    pub fn reset(&mut self) {
        log::info!("resetting game after {} moves", self.history.len());
        *self = Game::new();
    }

    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.board.in_check(color)
    }

    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        self.board.is_square_attacked(target, by)
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            side_to_move: self.side_to_move,
            in_check: self.in_check(self.side_to_move),
            white_in_check: self.in_check(Color::White),
            black_in_check: self.in_check(Color::Black),
            cells: *self.board.cells(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
