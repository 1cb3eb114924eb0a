//! Piece placement: splitting the first field into ranks and reading squares
//! straight from the run-length encoded tokens.

use std::str::Chars;

use super::error::FenError;
use super::types::{Color, FILES, RANKS};

const PIECES: &str = "RNBQKPrnbqkp";

/// Splits the placement field into its 8 rank tokens, rank 8 first.
pub(crate) fn split(placement: &str) -> Result<[&str; RANKS as usize], FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    ranks
        .try_into()
        .map_err(|ranks: Vec<&str>| FenError::RanksCount(ranks.len()))
}

/// Cheap whole-field check run before any rank is looked at in detail.
pub(crate) fn require_kings(placement: &str) -> Result<(), FenError> {
    for color in [Color::White, Color::Black] {
        if !placement.contains(color.king()) {
            return Err(FenError::MissingKing { color });
        }
    }
    Ok(())
}

pub(crate) fn validate(rank: &str) -> Result<(), FenError> {
    let invalid_character = rank
        .chars()
        .any(|c| !PIECES.contains(c) && !('1'..='8').contains(&c));
    let adjacent_digits = rank
        .as_bytes()
        .windows(2)
        .any(|pair| pair[0].is_ascii_digit() && pair[1].is_ascii_digit());

    if invalid_character || adjacent_digits {
        return Err(FenError::InvalidRank(rank.to_string()));
    }

    let length = length(rank);
    if length != FILES as usize {
        return Err(FenError::RankLength(length));
    }
    Ok(())
}

/// Number of squares a rank token covers. Only meaningful once the token
/// passed the character check.
fn length(rank: &str) -> usize {
    scan(rank).map(|span| span.width as usize).sum()
}

/// A run of squares produced by one character of a rank token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    /// 0-based file of the first square covered.
    pub file: u8,
    pub width: u8,
    /// The piece letter, or `None` for a run of empty squares.
    pub piece: Option<char>,
}

impl Span {
    fn covers(&self, file: u8) -> bool {
        self.file <= file && file < self.file + self.width
    }
}

/// Walks a rank token left to right, tracking the file each character starts on.
pub(crate) struct Scan<'a> {
    chars: Chars<'a>,
    file: u8,
}

pub(crate) fn scan(rank: &str) -> Scan<'_> {
    Scan {
        chars: rank.chars(),
        file: 0,
    }
}

impl Iterator for Scan<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let c = self.chars.next()?;
        let (width, piece) = match c.to_digit(10) {
            Some(empty) => (empty as u8, None),
            None => (1, Some(c)),
        };
        let span = Span {
            file: self.file,
            width,
            piece,
        };
        self.file = self.file.saturating_add(width);
        Some(span)
    }
}

/// Content of one square of a rank: the piece letter, or `None` when the square
/// is empty. Scanning stops at the first character whose run reaches `file`.
pub(crate) fn occupant(rank: &str, file: u8) -> Option<char> {
    scan(rank)
        .find(|span| span.covers(file))
        .and_then(|span| span.piece)
}
