use super::super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Board, Color, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [(i8, i8)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Board {
    /// Casts each ray until the edge or the first occupied square. An
    /// opposing piece there is included as a capture; an own piece is not.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
    ) -> Vec<Square> {
        let mut moves = Vec::new();
        for &(df, dr) in slider.directions() {
            let mut next = from.offset(df, dr);
            while let Some(to) = next {
                match self.color_at(to) {
                    None => moves.push(to),
                    Some(c) => {
                        if c != color {
                            moves.push(to);
                        }
                        break;
                    }
                }
                next = to.offset(df, dr);
            }
        }
        moves
    }
}
