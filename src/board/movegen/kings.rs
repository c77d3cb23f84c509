use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Color, Square};

impl Board {
    /// One step in any direction. No castling.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color) -> Vec<Square> {
        KING_TARGETS[from.index()]
            .iter()
            .copied()
            .filter(|&to| self.can_land_on(to, color))
            .collect()
    }
}
