//! Validators for the five fields that follow the piece placement

use super::error::FenError;
use super::types::{CastlingRights, Color, Square};

pub(crate) fn active_player(field: &str) -> Result<Color, FenError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::ActivePlayer(field.to_string())),
    }
}

/// Accepts `-` or any subsequence of `KQkq`, letters kept in that order.
pub(crate) fn castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::NONE;
    if field == "-" {
        return Ok(rights);
    }

    let mut expected = &CastlingRights::LETTERS[..];
    for letter in field.chars() {
        let index = expected
            .iter()
            .position(|&candidate| candidate == letter)
            .ok_or_else(|| FenError::CastlingSyntax(field.to_string()))?;
        rights.insert_letter(letter);
        expected = &expected[index + 1..];
    }

    if rights.is_empty() {
        return Err(FenError::CastlingSyntax(field.to_string()));
    }
    Ok(rights)
}

/// Only ranks 3 and 6 can be skipped over by a double pawn push.
pub(crate) fn en_passant(field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }

    let invalid = || FenError::EnPassantSquare(field.to_string());
    match field.as_bytes() {
        [file @ b'a'..=b'h', rank @ (b'3' | b'6')] => {
            Square::new(file - b'a', rank - b'0').map(Some).ok_or_else(invalid)
        }
        _ => Err(invalid()),
    }
}

pub(crate) fn plies(field: &str) -> Result<(), FenError> {
    if field == "0" || is_positive_integer(field) {
        Ok(())
    } else {
        Err(FenError::PliesCounter(field.to_string()))
    }
}

pub(crate) fn turns(field: &str) -> Result<(), FenError> {
    if is_positive_integer(field) {
        Ok(())
    } else {
        Err(FenError::TurnsCounter(field.to_string()))
    }
}

/// `[1-9][0-9]*`: no sign, no leading zero, unbounded length.
fn is_positive_integer(field: &str) -> bool {
    match field.as_bytes() {
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
        [] => false,
    }
}
