//! Rejection reasons for FEN strings

use thiserror::Error;

use super::types::{CastlingClaim, Color, MovedPiece, Square};

/// Why a string is not an acceptable FEN. Exactly one kind is reported per
/// rejected string: the first stage that fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN is missing")]
    NullFen,

    #[error("FEN must contain 6 space-delimited parts, got {0}")]
    PartsCount(usize),

    #[error("FEN must contain 8 slash-delimited ranks, got {0}")]
    RanksCount(usize),

    #[error("FEN doesn't contain the {color} king '{}'", .color.king())]
    MissingKing { color: Color },

    #[error("FEN contains an invalid rank '{0}', it must be made of [RNBQKPrnbqkp] or single digits [1-8]")]
    InvalidRank(String),

    #[error("FEN ranks must be 8 squares long, got {0}")]
    RankLength(usize),

    #[error("active player must be 'w' or 'b', got '{0}'")]
    ActivePlayer(String),

    #[error("castling must be '-' or letters of 'KQkq' in this order, got '{0}'")]
    CastlingSyntax(String),

    #[error("castling contains {color} {claim}, but the {piece} moved from {square}")]
    ConflictingCastling {
        color: Color,
        claim: CastlingClaim,
        piece: MovedPiece,
        square: Square,
    },

    #[error("en passant square must be '-' or a square of rank 3 or 6, got '{0}'")]
    EnPassantSquare(String),

    #[error("plies counter must be an integer >= 0 without leading zero, got '{0}'")]
    PliesCounter(String),

    #[error("turns counter must be an integer >= 1 without leading zero, got '{0}'")]
    TurnsCounter(String),
}
