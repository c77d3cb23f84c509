//! Pseudo-legal move generation.
//!
//! Moves here respect piece geometry, board edges and occupancy (no
//! self-capture) but ignore king safety; see `legality` for the filter.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Color, Piece, PieceKind, Square};

impl Board {
    /// Destinations reachable by `piece` from `from`, ignoring check.
    ///
    /// `piece` need not actually stand on `from`; only the other squares'
    /// occupancy is consulted.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square, piece: Piece) -> Vec<Square> {
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece.color),
            PieceKind::Knight => self.generate_knight_moves(from, piece.color),
            PieceKind::King => self.generate_king_moves(from, piece.color),
            PieceKind::Rook => self.generate_slider_moves(from, piece.color, SliderType::Rook),
            PieceKind::Bishop => self.generate_slider_moves(from, piece.color, SliderType::Bishop),
            PieceKind::Queen => self.generate_slider_moves(from, piece.color, SliderType::Queen),
        }
    }

    /// Empty, or holding an opposing piece.
    #[inline]
    pub(crate) fn can_land_on(&self, sq: Square, color: Color) -> bool {
        self.color_at(sq) != Some(color)
    }
}
