use super::super::{Board, Color, Square};

impl Board {
    /// Pushes and diagonal captures. No en passant, no promotion: a pawn on
    /// the last rank simply has no forward moves.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::new();
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(0, dir) {
            if self.is_empty(forward) {
                moves.push(forward);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = forward.offset(0, dir) {
                        if self.is_empty(double) {
                            moves.push(double);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(target) = from.offset(df, dir) {
                if matches!(self.color_at(target), Some(c) if c != color) {
                    moves.push(target);
                }
            }
        }
        moves
    }
}
