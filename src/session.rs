//! Shared handle to one game session.
//!
//! Legal-move generation temporarily mutates the board, so every access to a
//! game goes through a single exclusive lock.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::{Color, Move, MoveError, Square};
use crate::game::{Game, GameSnapshot};

/// A game behind an `Arc<Mutex<_>>`. Clones share the same game.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    /// New session at the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_game(Game::new())
    }

    #[must_use]
    pub fn from_game(game: Game) -> Self {
        log::debug!("starting game session");
        SharedGame(Arc::new(Mutex::new(game)))
    }

    /// Exclusive access for several operations in a row.
    pub fn lock(&self) -> MutexGuard<'_, Game> {
        self.0.lock()
    }

    /// Run `f` with exclusive access.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut *self.0.lock())
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.0.lock().snapshot()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.0.lock().side_to_move()
    }

    #[must_use]
    pub fn moves(&self) -> Vec<String> {
        self.0.lock().moves()
    }

    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> Vec<Square> {
        self.0.lock().legal_moves_from(from)
    }

    pub fn make_move(&self, from: Square, to: Square) -> Result<Move, MoveError> {
        self.0.lock().make_move(from, to)
    }

    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.0.lock().in_check(color)
    }

    /// Swap in a fresh game while holding the lock.
    pub fn reset(&self) {
        self.0.lock().reset();
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::board::Board;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_clones_share_game() {
        let session = SharedGame::new();
        let other = session.clone();
        session.make_move(sq("e2"), sq("e4")).unwrap();
        assert_eq!(other.side_to_move(), Color::Black);
        assert_eq!(other.moves(), vec!["e2-e4".to_string()]);
    }

    #[test]
    fn test_board_unchanged_after_concurrent_legal_move_queries() {
        let session = SharedGame::new();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let session = session.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        for from in Square::all() {
                            let _ = session.legal_moves_from(from);
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(session.lock().board(), &Board::new());
        assert!(session.moves().is_empty());
    }

    #[test]
    fn test_reset_through_session() {
        let session = SharedGame::new();
        session.make_move(sq("g1"), sq("f3")).unwrap();
        session.reset();
        assert_eq!(session.side_to_move(), Color::White);
        assert!(session.moves().is_empty());
        assert!(!session.snapshot().in_check);
    }

    #[test]
    fn test_with_runs_under_lock() {
        let session = SharedGame::new();
        let count = session.with(|game| {
            game.make_move(sq("e2"), sq("e4")).unwrap();
            game.make_move(sq("e7"), sq("e5")).unwrap();
            game.moves().len()
        });
        assert_eq!(count, 2);
        assert!(!session.in_check(Color::White));
    }
}
