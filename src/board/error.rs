//! Error types for board and move operations.

use std::fmt;

use super::Square;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Notation is not exactly two characters
    InvalidLength { notation: String },
    /// File letter outside 'a'..='h'
    FileOutOfRange { file: char },
    /// Rank digit outside '1'..='8'
    RankOutOfRange { rank: char },
    /// Numeric coordinates outside 0..=7
    CoordinatesOutOfBounds { file: u8, rank: u8 },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidLength { notation } => {
                write!(f, "Square '{notation}' must be exactly 2 characters")
            }
            SquareError::FileOutOfRange { file } => {
                write!(f, "File '{file}' out of range (must be 'a'-'h')")
            }
            SquareError::RankOutOfRange { rank } => {
                write!(f, "Rank '{rank}' out of range (must be '1'-'8')")
            }
            SquareError::CoordinatesOutOfBounds { file, rank } => {
                write!(f, "Coordinates ({file}, {rank}) out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Destination is not among the legal moves from `from` for the side to move
    IllegalMove { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::IllegalMove { from, to } => write!(f, "Illegal move '{from}-{to}'"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for piece placement (first FEN field) parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Placement must have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in placement string
    InvalidPiece { char: char },
    /// A rank describes more than 8 files
    TooManyFiles { rank: usize, files: usize },
    /// A rank describes fewer than 8 files
    TooFewFiles { rank: usize, files: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            PlacementError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Error type for move notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Not of the form `e2-e4` or `e2e4`
    InvalidFormat { notation: String },
    /// One of the two squares failed to parse
    InvalidSquare(SquareError),
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidFormat { notation } => {
                write!(f, "Move '{notation}' must look like 'e2-e4' or 'e2e4'")
            }
            MoveParseError::InvalidSquare(e) => write!(f, "Invalid square in move: {e}"),
        }
    }
}

impl std::error::Error for MoveParseError {}

impl From<SquareError> for MoveParseError {
    fn from(e: SquareError) -> Self {
        MoveParseError::InvalidSquare(e)
    }
}

/// Error type for piece letter parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceParseError {
    /// Not one of `PNBRQKpnbrqk`
    InvalidPiece { char: char },
}

impl fmt::Display for PieceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceParseError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}'")
            }
        }
    }
}

impl std::error::Error for PieceParseError {}
