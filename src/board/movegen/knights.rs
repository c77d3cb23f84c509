use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> Vec<Square> {
        KNIGHT_TARGETS[from.index()]
            .iter()
            .copied()
            .filter(|&to| self.can_land_on(to, color))
            .collect()
    }
}
