//! Coordinate-notation conversion.
//!
//! The opening book and callers speak four-character coordinate form
//! (`e2e4`, optionally a fifth promotion character such as `e7e8q`). Files
//! `a`..`h` map to columns 0..7; ranks `1`..`8` map to rows 7..0, so rank 8
//! is row 0. This must stay bit-exact with the board orientation or notation
//! and move generation silently disagree.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{BoardLocation, Move, PieceKind};

/// Convert a two-character square ("e4") to a board location.
#[inline]
pub fn coordinate_to_location(square: &str) -> Result<BoardLocation, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidCoordinate(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidCoordinate(square.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = (b'8' - rank) as i8;
    Ok((row, col))
}

/// Convert a board location to a two-character square ("e4").
#[inline]
pub fn location_to_coordinate(x: BoardLocation) -> Result<String, ChessErrors> {
    if !crate::game_state::chess_types::in_bounds(x) {
        return Err(ChessErrors::InvalidCoordinate(format!("({},{})", x.0, x.1)));
    }
    let file = char::from(b'a' + x.1 as u8);
    let rank = char::from(b'8' - x.0 as u8);
    Ok(format!("{file}{rank}"))
}

/// Parse a coordinate-notation move (4 characters, optional promotion char).
pub fn parse_move(notation: &str) -> Result<Move, ChessErrors> {
    let bytes = notation.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(ChessErrors::InvalidCoordinate(notation.to_owned()));
    }

    let from = coordinate_to_location(&notation[0..2])?;
    let to = coordinate_to_location(&notation[2..4])?;
    let promotion = if bytes.len() == 5 {
        Some(char_to_promotion(bytes[4] as char)?)
    } else {
        None
    };

    Ok(Move {
        from,
        to,
        promotion,
    })
}

/// Serialize a move back to coordinate notation. The promotion character is
/// only emitted when the move carries an explicit promotion kind, so parsing
/// a four-character string and formatting the result reproduces it exactly.
pub fn format_move(mv: &Move) -> Result<String, ChessErrors> {
    let mut out = String::new();
    out.push_str(&location_to_coordinate(mv.from)?);
    out.push_str(&location_to_coordinate(mv.to)?);
    if let Some(kind) = mv.promotion {
        out.push(promotion_to_char(kind)?);
    }
    Ok(out)
}

fn char_to_promotion(ch: char) -> Result<PieceKind, ChessErrors> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(ChessErrors::InvalidPromotionPiece(ch)),
    }
}

fn promotion_to_char(kind: PieceKind) -> Result<char, ChessErrors> {
    match kind {
        PieceKind::Knight => Ok('n'),
        PieceKind::Bishop => Ok('b'),
        PieceKind::Rook => Ok('r'),
        PieceKind::Queen => Ok('q'),
        PieceKind::Pawn | PieceKind::King => Err(ChessErrors::InvalidPromotionPiece('?')),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_eight_is_row_zero() {
        assert_eq!(coordinate_to_location("a8").unwrap(), (0, 0));
        assert_eq!(coordinate_to_location("h1").unwrap(), (7, 7));
        assert_eq!(coordinate_to_location("e2").unwrap(), (6, 4));
        assert_eq!(location_to_coordinate((0, 0)).unwrap(), "a8");
        assert_eq!(location_to_coordinate((6, 4)).unwrap(), "e2");
    }

    #[test]
    fn every_four_character_notation_round_trips() {
        for from_file in b'a'..=b'h' {
            for from_rank in b'1'..=b'8' {
                for to_file in b'a'..=b'h' {
                    for to_rank in b'1'..=b'8' {
                        let notation = String::from_utf8(vec![
                            from_file, from_rank, to_file, to_rank,
                        ])
                        .unwrap();
                        let mv = parse_move(&notation).expect("should parse");
                        assert_eq!(format_move(&mv).unwrap(), notation);
                    }
                }
            }
        }
    }

    #[test]
    fn promotion_suffix_parses_and_formats() {
        let mv = parse_move("e7e8q").unwrap();
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        assert_eq!(format_move(&mv).unwrap(), "e7e8q");
        assert!(parse_move("e7e8x").is_err());
    }

    #[test]
    fn malformed_strings_are_rejected() {
        assert!(parse_move("e2").is_err());
        assert!(parse_move("e2e9").is_err());
        assert!(parse_move("i2e4").is_err());
        assert!(parse_move("e2e4e5").is_err());
        assert!(coordinate_to_location("").is_err());
    }
}
