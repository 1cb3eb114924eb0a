//! Small board vocabulary shared by the FEN stages

use std::fmt;

pub const FILES: u8 = 8;
pub const RANKS: u8 = 8;

/// Side of the board, named after the pieces it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    pub fn king(&self) -> char {
        match self {
            Color::White => 'K',
            Color::Black => 'k',
        }
    }

    pub fn rook(&self) -> char {
        match self {
            Color::White => 'R',
            Color::Black => 'r',
        }
    }

    /// Board rank (1-8) holding this color's king and rooks at the start.
    pub fn home_rank(&self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    King,
    Queen,
}

/// What a castling flag claims: the right of a whole player, or of one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingClaim {
    Player,
    Side(CastlingSide),
}

impl fmt::Display for CastlingClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CastlingClaim::Player => "player",
            CastlingClaim::Side(CastlingSide::King) => "king side",
            CastlingClaim::Side(CastlingSide::Queen) => "queen side",
        })
    }
}

/// Piece whose displacement invalidates a castling claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovedPiece {
    King,
    Rook,
}

impl fmt::Display for MovedPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MovedPiece::King => "king",
            MovedPiece::Rook => "rook",
        })
    }
}

/// A board square. `file` is 0-based (a = 0), `rank` is the printed 1-8 label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < FILES && (1..=RANKS).contains(&rank)).then_some(Self { file, rank })
    }

    /// Square of `color`'s back rank on `file` (0-7).
    pub(crate) fn home(file: u8, color: Color) -> Self {
        Self {
            file: file.min(FILES - 1),
            rank: color.home_rank(),
        }
    }

    pub fn file(&self) -> u8 {
        self.file
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn file_char(&self) -> char {
        char::from(b'a' + self.file)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank)
    }
}

/// The `KQkq` flags of a FEN, stored as a bit set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Flag letters in the only order a FEN may list them.
    pub(crate) const LETTERS: [char; 4] = ['K', 'Q', 'k', 'q'];

    fn bit(color: Color, side: CastlingSide) -> u8 {
        match (color, side) {
            (Color::White, CastlingSide::King) => 0b0001,
            (Color::White, CastlingSide::Queen) => 0b0010,
            (Color::Black, CastlingSide::King) => 0b0100,
            (Color::Black, CastlingSide::Queen) => 0b1000,
        }
    }

    fn flag(letter: char) -> Option<(Color, CastlingSide)> {
        match letter {
            'K' => Some((Color::White, CastlingSide::King)),
            'Q' => Some((Color::White, CastlingSide::Queen)),
            'k' => Some((Color::Black, CastlingSide::King)),
            'q' => Some((Color::Black, CastlingSide::Queen)),
            _ => None,
        }
    }

    pub(crate) fn insert_letter(&mut self, letter: char) {
        if let Some((color, side)) = Self::flag(letter) {
            self.0 |= Self::bit(color, side);
        }
    }

    pub fn allows(&self, color: Color, side: CastlingSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    pub fn any(&self, color: Color) -> bool {
        self.allows(color, CastlingSide::King) || self.allows(color, CastlingSide::Queen)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for letter in Self::LETTERS {
            if let Some((color, side)) = Self::flag(letter) {
                if self.allows(color, side) {
                    write!(f, "{}", letter)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_display() {
        assert_eq!(Square::new(4, 8).unwrap().to_string(), "e8");
        assert_eq!(Square::new(0, 1).unwrap().to_string(), "a1");
        assert!(Square::new(8, 1).is_none());
        assert!(Square::new(0, 0).is_none());
    }

    #[test]
    fn test_castling_rights_display() {
        let mut rights = CastlingRights::NONE;
        assert_eq!(rights.to_string(), "-");

        rights.insert_letter('q');
        rights.insert_letter('K');
        assert_eq!(rights.to_string(), "Kq");
        assert!(rights.allows(Color::White, CastlingSide::King));
        assert!(!rights.allows(Color::White, CastlingSide::Queen));
        assert!(rights.any(Color::Black));
        assert_eq!(CastlingRights::ALL.to_string(), "KQkq");
    }

    #[test]
    fn test_claim_display() {
        assert_eq!(CastlingClaim::Player.to_string(), "player");
        assert_eq!(CastlingClaim::Side(CastlingSide::Queen).to_string(), "queen side");
    }
}
