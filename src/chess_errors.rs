//! Errors used throughout the engine core.
//!
//! `ChessErrors` is the single error type returned by board manipulation and
//! parsing utilities. Engine-level seams (the `Engine` trait) flatten these
//! into `String` messages, matching how the UCI-style layers report problems.
//!
//! Missing kings are deliberately *not* an error anywhere in this crate:
//! check detection degrades to "no check" instead, so malformed caller boards
//! never panic or abort a move selection.

use crate::game_state::chess_types::BoardLocation;

/// Unified error type for board operations and notation parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ChessErrors {
    /// A location offset landed outside the 8x8 board.
    ///
    /// Payload: (origin, d_row, d_col).
    OutOfBounds(BoardLocation, i8, i8),

    /// A coordinate-notation string ("e4", "e2e4", "e7e8q") failed to parse.
    InvalidCoordinate(String),

    /// A promotion character outside `n`, `b`, `r`, `q`.
    InvalidPromotionPiece(char),

    /// A FEN string had malformed structure or an unexpected token.
    InvalidFenString(String),

    /// Tried to place a piece onto an occupied square while building a board.
    BoardLocationOccupied(BoardLocation),
}

impl std::fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChessErrors::OutOfBounds(origin, d_row, d_col) => write!(
                f,
                "offset ({d_row},{d_col}) from ({},{}) leaves the board",
                origin.0, origin.1
            ),
            ChessErrors::InvalidCoordinate(s) => write!(f, "invalid coordinate notation: {s}"),
            ChessErrors::InvalidPromotionPiece(c) => write!(f, "invalid promotion piece: {c}"),
            ChessErrors::InvalidFenString(s) => write!(f, "invalid FEN string: {s}"),
            ChessErrors::BoardLocationOccupied(loc) => {
                write!(f, "board location ({},{}) already occupied", loc.0, loc.1)
            }
        }
    }
}
