//! Property tests over generated FEN strings

use proptest::prelude::*;
use proptest::sample::subsequence;

use super::ranks;
use super::types::{CastlingSide, Color, RANKS};
use super::Fen;

const PIECES: [char; 12] = ['R', 'N', 'B', 'Q', 'K', 'P', 'r', 'n', 'b', 'q', 'k', 'p'];

type Board = Vec<Vec<Option<char>>>;

fn square() -> impl Strategy<Value = Option<char>> {
    prop_oneof![
        5 => Just(None),
        1 => proptest::sample::select(PIECES.to_vec()).prop_map(Some),
    ]
}

/// 8x8 squares, rank 8 first. Both kings are dropped somewhere, and each back
/// rank is sometimes reset to `r...k..r` so castling flags can hold.
fn board() -> impl Strategy<Value = Board> {
    (
        proptest::collection::vec(proptest::collection::vec(square(), 8), 8),
        (0..8usize, 0..8usize),
        (0..8usize, 0..8usize),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(mut board, white_king, black_king, white_home, black_home)| {
            board[white_king.0][white_king.1] = Some('K');
            board[black_king.0][black_king.1] = Some('k');
            for (home, rank, color) in [(white_home, 7, Color::White), (black_home, 0, Color::Black)] {
                if home {
                    board[rank][0] = Some(color.rook());
                    board[rank][4] = Some(color.king());
                    board[rank][7] = Some(color.rook());
                }
            }
            board
        })
}

fn encode_rank(squares: &[Option<char>]) -> String {
    let mut rank = String::new();
    let mut empty = 0;
    for square in squares {
        match square {
            Some(piece) => {
                if empty > 0 {
                    rank.push_str(&empty.to_string());
                    empty = 0;
                }
                rank.push(*piece);
            }
            None => empty += 1,
        }
    }
    if empty > 0 {
        rank.push_str(&empty.to_string());
    }
    rank
}

fn castling() -> impl Strategy<Value = String> {
    subsequence(vec!['K', 'Q', 'k', 'q'], 0..=4).prop_map(|letters| {
        if letters.is_empty() {
            "-".to_string()
        } else {
            letters.into_iter().collect()
        }
    })
}

/// The six fields of a FEN that is well-formed except, possibly, for its
/// castling flags.
fn fields() -> impl Strategy<Value = Vec<String>> {
    (
        board(),
        prop_oneof![Just("w"), Just("b")],
        castling(),
        prop_oneof![Just("-".to_string()), "[a-h][36]"],
        "0|[1-9][0-9]{0,3}",
        "[1-9][0-9]{0,3}",
    )
        .prop_map(|(board, active, castling, en_passant, plies, turns)| {
            let placement = board
                .iter()
                .map(|rank| encode_rank(rank))
                .collect::<Vec<_>>()
                .join("/");
            vec![placement, active.to_string(), castling, en_passant, plies, turns]
        })
}

/// Joins fields with runs of ASCII whitespace, padding both ends.
fn respaced(fields: &[String], separators: &[String]) -> String {
    let mut fen = separators[0].clone();
    for (field, separator) in fields.iter().zip(&separators[1..]) {
        fen.push_str(field);
        fen.push_str(separator);
    }
    fen
}

fn separator() -> impl Strategy<Value = String> {
    "[ \t\n\r\x0B\x0C]{1,3}"
}

proptest! {
    #[test]
    fn test_parsing_is_deterministic(fen in any::<String>()) {
        prop_assert_eq!(Fen::parse(&fen), Fen::parse(&fen));
    }

    #[test]
    fn test_parsing_fen_like_noise_is_deterministic(fen in "[rnbqkpRNBQKP1-9/ wKQ\\-a-h0]{0,60}") {
        prop_assert_eq!(Fen::parse(&fen), Fen::parse(&fen));
    }

    #[test]
    fn test_spacing_does_not_change_the_outcome(
        fields in fields(),
        separators in proptest::collection::vec(separator(), 7),
    ) {
        let single_spaced = fields.join(" ");
        prop_assert_eq!(Fen::parse(&respaced(&fields, &separators)), Fen::parse(&single_spaced));
    }

    #[test]
    fn test_canonical_form_is_a_fixed_point(fields in fields()) {
        if let Ok(fen) = Fen::parse(&fields.join(" ")) {
            let reparsed = Fen::parse(fen.as_str()).unwrap();
            prop_assert_eq!(reparsed.as_str(), fen.as_str());
            prop_assert_eq!(reparsed, fen);
        }
    }

    #[test]
    fn test_accepted_ranks_cover_eight_squares(fields in fields()) {
        if let Ok(fen) = Fen::parse(&fields.join(" ")) {
            prop_assert_eq!(fen.ranks().count(), RANKS as usize);
            for rank in fen.ranks() {
                let width: u32 = ranks::scan(rank).map(|span| u32::from(span.width)).sum();
                prop_assert_eq!(width, 8, "rank {}", rank);
            }
        }
    }

    #[test]
    fn test_accepted_castling_flags_have_their_pieces_home(fields in fields()) {
        if let Ok(fen) = Fen::parse(&fields.join(" ")) {
            let placement: Vec<&str> = fen.ranks().collect();
            for color in [Color::White, Color::Black] {
                let home = placement[(RANKS - color.home_rank()) as usize];
                if fen.castling().any(color) {
                    prop_assert_eq!(ranks::occupant(home, 4), Some(color.king()));
                }
                if fen.castling().allows(color, CastlingSide::Queen) {
                    prop_assert_eq!(ranks::occupant(home, 0), Some(color.rook()));
                }
                if fen.castling().allows(color, CastlingSide::King) {
                    prop_assert_eq!(ranks::occupant(home, 7), Some(color.rook()));
                }
            }
        }
    }

    #[test]
    fn test_castling_with_pieces_home_is_accepted(fields in fields()) {
        let placement: Vec<&str> = fields[0].split('/').collect();
        let home_ok = |color: Color, side: CastlingSide| {
            let home = placement[(RANKS - color.home_rank()) as usize];
            let rook_file = match side {
                CastlingSide::Queen => 0,
                CastlingSide::King => 7,
            };
            ranks::occupant(home, 4) == Some(color.king())
                && ranks::occupant(home, rook_file) == Some(color.rook())
        };
        let consistent = fields[2].chars().all(|letter| match letter {
            'K' => home_ok(Color::White, CastlingSide::King),
            'Q' => home_ok(Color::White, CastlingSide::Queen),
            'k' => home_ok(Color::Black, CastlingSide::King),
            'q' => home_ok(Color::Black, CastlingSide::Queen),
            _ => true,
        });
        prop_assert_eq!(Fen::parse(&fields.join(" ")).is_ok(), consistent);
    }
}
