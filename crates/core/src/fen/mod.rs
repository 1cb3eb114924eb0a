//! Forsyth-Edwards Notation
//!
//! [`Fen`] is the only way to hold a position string in this crate. Building
//! one runs the whole validation pipeline once, and the first failing stage is
//! returned as a [`FenError`].

mod castling;
mod error;
mod fields;
mod ranks;
mod types;

#[cfg(test)]
mod properties;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

pub use error::FenError;
pub use types::{CastlingClaim, CastlingRights, CastlingSide, Color, MovedPiece, Square};

/// FEN of the standard starting position.
pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const FIELDS: usize = 6;

/// A validated FEN in canonical form: single-space separated, trimmed.
///
/// Two values are equal iff their canonical strings are equal, so positions
/// that only differ by their counters are different FENs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fen {
    canonical: String,
    active_player: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
}

impl Fen {
    /// Validates an optional input, `None` being reported as [`FenError::NullFen`].
    pub fn new(fen: Option<&str>) -> Result<Self, FenError> {
        fen.ok_or(FenError::NullFen).and_then(Self::parse)
    }

    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let canonical = normalize(fen);
        let fields = split_fields(&canonical)?;

        let placement = ranks::split(fields[0])?;
        ranks::require_kings(fields[0])?;
        for rank in placement {
            ranks::validate(rank)?;
        }

        let active_player = fields::active_player(fields[1])?;
        let castling = fields::castling(fields[2])?;
        castling::check(&placement, castling)?;
        let en_passant = fields::en_passant(fields[3])?;
        fields::plies(fields[4])?;
        fields::turns(fields[5])?;

        Ok(Self {
            active_player,
            castling,
            en_passant,
            canonical,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    pub fn into_string(self) -> String {
        self.canonical
    }

    fn field(&self, index: usize) -> &str {
        self.canonical.split(' ').nth(index).unwrap_or_default()
    }

    /// The 8 rank tokens, rank 8 first.
    pub fn ranks(&self) -> impl Iterator<Item = &str> {
        self.field(0).split('/')
    }

    pub fn active_player(&self) -> Color {
        self.active_player
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Half-moves since the last capture or pawn move, as written.
    pub fn plies(&self) -> &str {
        self.field(4)
    }

    /// Full-move number, as written.
    pub fn turns(&self) -> &str {
        self.field(5)
    }
}

/// Collapses ASCII whitespace runs to one space and trims both ends. Other
/// Unicode spaces, such as NBSP, are kept and end up inside a field.
fn normalize(fen: &str) -> String {
    fen.split(is_separator)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn split_fields(canonical: &str) -> Result<[&str; FIELDS], FenError> {
    let fields: Vec<&str> = canonical.split(' ').collect();
    fields
        .try_into()
        .map_err(|fields: Vec<&str>| FenError::PartsCount(fields.len()))
}

impl PartialEq for Fen {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Fen {}

impl Hash for Fen {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl fmt::Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl AsRef<str> for Fen {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl FromStr for Fen {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Fen {
    type Error = FenError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Fen {
    type Error = FenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Fen> for String {
    fn from(fen: Fen) -> Self {
        fen.canonical
    }
}
