//! Fixed piece-square tables in pawn units.
//!
//! Tables are indexed `[rank_from_own_back_rank][file]`: index 0 is the row
//! the side's back rank sits on, regardless of color. `bonus` handles the
//! flip, so these constants are written once and shared by both sides. The
//! king reads a distinct table in the endgame phase; that same endgame table
//! doubles as the king-centralization signal.

use crate::game_state::chess_types::{BoardLocation, Color, GamePhase, PieceKind};

pub type PieceSquareTable = [[f64; 8]; 8];

pub const PAWN_TABLE: PieceSquareTable = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.05, 0.10, 0.10, -0.20, -0.20, 0.10, 0.10, 0.05],
    [0.05, -0.05, -0.10, 0.0, 0.0, -0.10, -0.05, 0.05],
    [0.0, 0.0, 0.0, 0.20, 0.20, 0.0, 0.0, 0.0],
    [0.05, 0.05, 0.10, 0.25, 0.25, 0.10, 0.05, 0.05],
    [0.10, 0.10, 0.20, 0.30, 0.30, 0.20, 0.10, 0.10],
    [0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

pub const KNIGHT_TABLE: PieceSquareTable = [
    [-0.50, -0.40, -0.30, -0.30, -0.30, -0.30, -0.40, -0.50],
    [-0.40, -0.20, 0.0, 0.05, 0.05, 0.0, -0.20, -0.40],
    [-0.30, 0.05, 0.10, 0.15, 0.15, 0.10, 0.05, -0.30],
    [-0.30, 0.0, 0.15, 0.20, 0.20, 0.15, 0.0, -0.30],
    [-0.30, 0.05, 0.15, 0.20, 0.20, 0.15, 0.05, -0.30],
    [-0.30, 0.0, 0.10, 0.15, 0.15, 0.10, 0.0, -0.30],
    [-0.40, -0.20, 0.0, 0.0, 0.0, 0.0, -0.20, -0.40],
    [-0.50, -0.40, -0.30, -0.30, -0.30, -0.30, -0.40, -0.50],
];

pub const BISHOP_TABLE: PieceSquareTable = [
    [-0.20, -0.10, -0.10, -0.10, -0.10, -0.10, -0.10, -0.20],
    [-0.10, 0.05, 0.0, 0.0, 0.0, 0.0, 0.05, -0.10],
    [-0.10, 0.10, 0.10, 0.10, 0.10, 0.10, 0.10, -0.10],
    [-0.10, 0.0, 0.10, 0.10, 0.10, 0.10, 0.0, -0.10],
    [-0.10, 0.05, 0.05, 0.10, 0.10, 0.05, 0.05, -0.10],
    [-0.10, 0.0, 0.05, 0.10, 0.10, 0.05, 0.0, -0.10],
    [-0.10, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.10],
    [-0.20, -0.10, -0.10, -0.10, -0.10, -0.10, -0.10, -0.20],
];

pub const ROOK_TABLE: PieceSquareTable = [
    [0.0, 0.0, 0.0, 0.05, 0.05, 0.0, 0.0, 0.0],
    [-0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.05],
    [-0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.05],
    [-0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.05],
    [-0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.05],
    [-0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.05],
    [0.05, 0.10, 0.10, 0.10, 0.10, 0.10, 0.10, 0.05],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

pub const QUEEN_TABLE: PieceSquareTable = [
    [-0.20, -0.10, -0.10, -0.05, -0.05, -0.10, -0.10, -0.20],
    [-0.10, 0.0, 0.05, 0.0, 0.0, 0.0, 0.0, -0.10],
    [-0.10, 0.05, 0.05, 0.05, 0.05, 0.05, 0.0, -0.10],
    [0.0, 0.0, 0.05, 0.05, 0.05, 0.05, 0.0, -0.05],
    [-0.05, 0.0, 0.05, 0.05, 0.05, 0.05, 0.0, -0.05],
    [-0.10, 0.0, 0.05, 0.05, 0.05, 0.05, 0.0, -0.10],
    [-0.10, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.10],
    [-0.20, -0.10, -0.10, -0.05, -0.05, -0.10, -0.10, -0.20],
];

pub const KING_TABLE: PieceSquareTable = [
    [0.20, 0.30, 0.10, 0.0, 0.0, 0.10, 0.30, 0.20],
    [0.20, 0.20, 0.0, 0.0, 0.0, 0.0, 0.20, 0.20],
    [-0.10, -0.20, -0.20, -0.20, -0.20, -0.20, -0.20, -0.10],
    [-0.20, -0.30, -0.30, -0.40, -0.40, -0.30, -0.30, -0.20],
    [-0.30, -0.40, -0.40, -0.50, -0.50, -0.40, -0.40, -0.30],
    [-0.30, -0.40, -0.40, -0.50, -0.50, -0.40, -0.40, -0.30],
    [-0.30, -0.40, -0.40, -0.50, -0.50, -0.40, -0.40, -0.30],
    [-0.30, -0.40, -0.40, -0.50, -0.50, -0.40, -0.40, -0.30],
];

pub const KING_ENDGAME_TABLE: PieceSquareTable = [
    [-0.50, -0.30, -0.30, -0.30, -0.30, -0.30, -0.30, -0.50],
    [-0.30, -0.30, 0.0, 0.0, 0.0, 0.0, -0.30, -0.30],
    [-0.30, -0.10, 0.20, 0.30, 0.30, 0.20, -0.10, -0.30],
    [-0.30, -0.10, 0.30, 0.40, 0.40, 0.30, -0.10, -0.30],
    [-0.30, -0.10, 0.30, 0.40, 0.40, 0.30, -0.10, -0.30],
    [-0.30, -0.10, 0.20, 0.30, 0.30, 0.20, -0.10, -0.30],
    [-0.30, -0.20, -0.10, 0.0, 0.0, -0.10, -0.20, -0.30],
    [-0.50, -0.40, -0.30, -0.20, -0.20, -0.30, -0.40, -0.50],
];

/// Passed-pawn bonus by how far the pawn has advanced from its own back
/// rank. Grows steeply toward promotion.
pub const PASSED_PAWN_BONUS: [f64; 8] = [0.0, 0.05, 0.10, 0.20, 0.35, 0.60, 0.90, 0.0];

/// Rank index counted from the side's own back rank, used to index every
/// table above.
#[inline]
pub fn rank_from_own_back_rank(color: Color, location: BoardLocation) -> usize {
    match color {
        Color::Light => (7 - location.0) as usize,
        Color::Dark => location.0 as usize,
    }
}

/// Positional bonus for `kind` of `color` on `location`. The king swaps to
/// the endgame table when `phase` is `Endgame`.
pub fn bonus(kind: PieceKind, color: Color, location: BoardLocation, phase: GamePhase) -> f64 {
    let table = match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => match phase {
            GamePhase::Endgame => &KING_ENDGAME_TABLE,
            _ => &KING_TABLE,
        },
    };
    table[rank_from_own_back_rank(color, location)][location.1 as usize]
}
