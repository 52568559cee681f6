//! Core value types shared by every subsystem.
//!
//! The board is a plain mailbox of optional piece records; all of these types
//! are cheap `Copy` values so candidate positions can be cloned and mutated
//! freely during legality filtering and evaluation.

use crate::chess_errors::ChessErrors;

/// Side to move. `Light` is White, `Dark` is Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row direction a pawn of this color advances in. Row 0 is Dark's back
    /// rank and row 7 is Light's, so Light pawns move toward smaller rows.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Back rank row for this color.
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Starting row of this color's pawns.
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Row a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

/// Piece kind (color is represented separately in `PieceRecord`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
}

/// One occupied board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRecord {
    pub kind: PieceKind,
    pub color: Color,
}

/// `(row, col)`, both in `0..8`. Row 0 is Dark's back rank (rank 8 in
/// coordinate notation), row 7 is Light's back rank (rank 1). Piece-square
/// tables and notation conversion both depend on this orientation.
pub type BoardLocation = (i8, i8);

/// Offset a location by `(d_row, d_col)`, failing if the result leaves the
/// board.
#[inline]
pub fn offset_location(
    x: BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(ChessErrors::OutOfBounds(x, d_row, d_col))
    } else {
        Ok(y)
    }
}

#[inline]
pub fn in_bounds(x: BoardLocation) -> bool {
    (0..8).contains(&x.0) && (0..8).contains(&x.1)
}

/// A full move: source, destination, and an optional promotion kind. A pawn
/// reaching the last row with `promotion == None` becomes a queen when the
/// move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from: BoardLocation, to: BoardLocation) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }
}

/// Caller-supplied game phase. Never computed here; it only selects which
/// evaluation terms dominate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

/// Castling availability, one independent flag per color and side. These are
/// inputs: the engine never infers king/rook movement history, so callers
/// must keep them accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub king_light: bool,
    pub queen_light: bool,
    pub king_dark: bool,
    pub queen_dark: bool,
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            king_light: true,
            queen_light: true,
            king_dark: true,
            queen_dark: true,
        }
    }

    /// All-false rights, used by the mobility term which deliberately ignores
    /// castling when counting destination squares.
    pub const fn none() -> Self {
        Self {
            king_light: false,
            queen_light: false,
            king_dark: false,
            queen_dark: false,
        }
    }

    #[inline]
    pub const fn kingside(&self, color: Color) -> bool {
        match color {
            Color::Light => self.king_light,
            Color::Dark => self.king_dark,
        }
    }

    #[inline]
    pub const fn queenside(&self, color: Color) -> bool {
        match color {
            Color::Light => self.queen_light,
            Color::Dark => self.queen_dark,
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_location_rejects_off_board_targets() {
        assert!(offset_location((0, 0), -1, 0).is_err());
        assert!(offset_location((7, 7), 0, 1).is_err());
        assert_eq!(offset_location((3, 3), 1, -1).unwrap(), (4, 2));
    }

    #[test]
    fn pawn_rows_match_board_orientation() {
        assert_eq!(Color::Light.pawn_start_row(), 6);
        assert_eq!(Color::Light.promotion_row(), 0);
        assert_eq!(Color::Dark.pawn_start_row(), 1);
        assert_eq!(Color::Dark.promotion_row(), 7);
    }

    #[test]
    fn castling_rights_accessors_select_per_color_flags() {
        let mut rights = CastlingRights::all();
        rights.queen_dark = false;
        assert!(rights.kingside(Color::Light));
        assert!(rights.kingside(Color::Dark));
        assert!(!rights.queenside(Color::Dark));
        assert!(!CastlingRights::none().kingside(Color::Light));
    }
}
