//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal moves per piece kind
//! - `trial_move.rs` - Simulate/revert restores the board exactly
//! - `legality.rs` - Check filtering, pins and the initial position
//! - `perft.rs` - Node counts for move generation correctness
//! - `proptest.rs` - Property-based tests over random play


use crate::board::{Board, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn squares(list: &[&str]) -> Vec<Square> {
    let mut out: Vec<Square> = list.iter().map(|s| sq(s)).collect();
    out.sort();
    out
}

pub(super) fn sorted(mut moves: Vec<Square>) -> Vec<Square> {
    moves.sort();
    moves
}

pub(super) fn board(placement: &str) -> Board {
    Board::from_placement(placement)
}
