//! FEN parsing for tests, benches, and the demo binary.
//!
//! Only the first four FEN fields matter to this engine (placement, turn,
//! castling, en-passant); the clock fields are accepted and ignored when
//! present. FEN lists rank 8 first, which is row 0 in our orientation, so
//! placement parses top-down with no flipping.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    BoardLocation, CastlingRights, Color, PieceKind, PieceRecord,
};
use crate::utils::coordinate::coordinate_to_location;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Everything a FEN string describes that this engine consumes.
#[derive(Debug, Clone)]
pub struct ParsedFen {
    pub board: Board,
    pub turn: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<BoardLocation>,
}

pub fn parse_fen(fen: &str) -> Result<ParsedFen, ChessErrors> {
    let mut fields = fen.split_ascii_whitespace();

    let placement = fields
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString(fen.to_owned()))?;
    let board = parse_placement(placement, fen)?;

    let turn = match fields.next() {
        Some("w") => Color::Light,
        Some("b") => Color::Dark,
        _ => return Err(ChessErrors::InvalidFenString(fen.to_owned())),
    };

    let castling_field = fields
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString(fen.to_owned()))?;
    let mut castling = CastlingRights::none();
    for c in castling_field.chars() {
        match c {
            'K' => castling.king_light = true,
            'Q' => castling.queen_light = true,
            'k' => castling.king_dark = true,
            'q' => castling.queen_dark = true,
            '-' => (),
            _ => return Err(ChessErrors::InvalidFenString(fen.to_owned())),
        }
    }

    let en_passant = match fields.next() {
        Some("-") | None => None,
        Some(square) => Some(
            coordinate_to_location(square)
                .map_err(|_| ChessErrors::InvalidFenString(fen.to_owned()))?,
        ),
    };

    Ok(ParsedFen {
        board,
        turn,
        castling,
        en_passant,
    })
}

fn parse_placement(placement: &str, fen: &str) -> Result<Board, ChessErrors> {
    let mut board = Board::default();
    let mut row: i8 = 0;
    let mut col: i8 = 0;

    for c in placement.chars() {
        match c {
            '/' => {
                row += 1;
                col = 0;
            }
            '1'..='8' => {
                col += c.to_digit(10).expect("digit already matched") as i8;
            }
            _ => {
                let piece = piece_from_char(c)
                    .ok_or_else(|| ChessErrors::InvalidFenString(fen.to_owned()))?;
                if row > 7 || col > 7 {
                    return Err(ChessErrors::InvalidFenString(fen.to_owned()));
                }
                board.place(piece, (row, col))?;
                col += 1;
            }
        }
    }

    Ok(board)
}

fn piece_from_char(c: char) -> Option<PieceRecord> {
    let color = if c.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };
    let kind = match c.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(PieceRecord { kind, color })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_fen_parses_with_full_rights() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("should parse");
        assert_eq!(parsed.turn, Color::Light);
        assert_eq!(parsed.castling, CastlingRights::all());
        assert_eq!(parsed.en_passant, None);
        assert_eq!(
            *parsed.board.view((0, 3)),
            Some(PieceRecord {
                kind: PieceKind::Queen,
                color: Color::Dark
            })
        );
        assert_eq!(
            *parsed.board.view((7, 4)),
            Some(PieceRecord {
                kind: PieceKind::King,
                color: Color::Light
            })
        );
    }

    #[test]
    fn en_passant_square_lands_in_board_orientation() {
        let parsed = parse_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
            .expect("should parse");
        // d6 = row 2, col 3.
        assert_eq!(parsed.en_passant, Some((2, 3)));
    }

    #[test]
    fn malformed_fens_are_rejected() {
        assert!(parse_fen("").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KZkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1").is_err());
    }
}
