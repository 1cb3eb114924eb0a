//! Cross-check of castling rights against the home ranks

use super::error::FenError;
use super::ranks;
use super::types::{CastlingClaim, CastlingRights, CastlingSide, Color, MovedPiece, Square, RANKS};

const KING_FILE: u8 = 4;
const QUEEN_ROOK_FILE: u8 = 0;
const KING_ROOK_FILE: u8 = 7;

/// A castling flag is only consistent if its king and rook never left their
/// starting squares. Black is checked before white.
pub(crate) fn check(
    placement: &[&str; RANKS as usize],
    rights: CastlingRights,
) -> Result<(), FenError> {
    for color in [Color::Black, Color::White] {
        check_color(home_rank_token(placement, color), rights, color)?;
    }
    Ok(())
}

fn home_rank_token<'a>(placement: &[&'a str; RANKS as usize], color: Color) -> &'a str {
    // tokens run from rank 8 down to rank 1
    placement[(RANKS - color.home_rank()) as usize]
}

fn check_color(rank: &str, rights: CastlingRights, color: Color) -> Result<(), FenError> {
    if !rights.any(color) {
        return Ok(());
    }

    if ranks::occupant(rank, KING_FILE) != Some(color.king()) {
        return Err(conflict(color, CastlingClaim::Player, MovedPiece::King, KING_FILE));
    }

    for (side, rook_file) in [
        (CastlingSide::Queen, QUEEN_ROOK_FILE),
        (CastlingSide::King, KING_ROOK_FILE),
    ] {
        if rights.allows(color, side) && ranks::occupant(rank, rook_file) != Some(color.rook()) {
            return Err(conflict(color, CastlingClaim::Side(side), MovedPiece::Rook, rook_file));
        }
    }
    Ok(())
}

fn conflict(color: Color, claim: CastlingClaim, piece: MovedPiece, file: u8) -> FenError {
    FenError::ConflictingCastling {
        color,
        claim,
        piece,
        square: Square::home(file, color),
    }
}
