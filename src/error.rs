//! Error types for table construction and FEN parsing.

use thiserror::Error;

use crate::attacks::Slider;

/// Building a magic table failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MagicError {
    /// No candidate multiplier hashed the square's occupancies without a harmful collision.
    /// On an 8x8 board this means the masks or table sizes are wrong, not bad luck.
    #[error("no collision-free {slider} multiplier for square {square} after {attempts} attempts")]
    SearchExhausted {
        slider: Slider,
        square: u8,
        attempts: u32,
    },
}

/// A FEN record could not be parsed. Each variant names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected 4 to 6 space separated fields, found {0}")]
    WrongFieldCount(usize),

    #[error("invalid piece placement `{placement}`: {reason}")]
    Placement {
        placement: String,
        reason: &'static str,
    },

    #[error("invalid side to move `{0}`, expected `w` or `b`")]
    SideToMove(String),

    #[error("invalid castling rights `{0}`")]
    Castling(String),

    #[error("invalid en passant square `{0}`")]
    EnPassant(String),

    #[error("invalid halfmove clock `{0}`")]
    HalfmoveClock(String),

    #[error("invalid fullmove number `{0}`")]
    FullmoveNumber(String),
}
