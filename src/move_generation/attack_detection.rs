//! Geometric attack detection.
//!
//! `attacks` answers "could the piece on `attacker` capture on `target`
//! right now" by direct geometry plus blocker scans on sliding rays. It
//! never recurses into move generation, which keeps it safe to call from
//! inside move generation itself (king single-step pre-filtering).

use crate::game_state::board::Board;
use crate::game_state::chess_types::{in_bounds, BoardLocation, Color, PieceKind};

/// Whether the piece on `attacker` could capture on `target`. Empty attacker
/// squares and `attacker == target` both answer false.
pub fn attacks(board: &Board, attacker: BoardLocation, target: BoardLocation) -> bool {
    let Some(piece) = board.view(attacker) else {
        return false;
    };
    if attacker == target {
        return false;
    }

    let d_row = target.0 - attacker.0;
    let d_col = target.1 - attacker.1;

    match piece.kind {
        PieceKind::Pawn => {
            // Pawns strike one square diagonally forward, never straight on.
            d_row == piece.color.forward() && d_col.abs() == 1
        }
        PieceKind::Knight => {
            (d_row.abs() == 2 && d_col.abs() == 1) || (d_row.abs() == 1 && d_col.abs() == 2)
        }
        PieceKind::King => d_row.abs() <= 1 && d_col.abs() <= 1,
        PieceKind::Bishop => d_row.abs() == d_col.abs() && ray_is_clear(board, attacker, target),
        PieceKind::Rook => (d_row == 0 || d_col == 0) && ray_is_clear(board, attacker, target),
        PieceKind::Queen => {
            (d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs())
                && ray_is_clear(board, attacker, target)
        }
    }
}

/// Whether any piece of `by_color` attacks `square`.
pub fn is_attacked(board: &Board, square: BoardLocation, by_color: Color) -> bool {
    board
        .pieces_of(by_color)
        .iter()
        .any(|(location, _)| attacks(board, *location, square))
}

/// Whether `color`'s king is currently attacked. A missing king degrades to
/// "no check" instead of failing.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_attacked(board, king, color.opposite()),
        None => false,
    }
}

/// Scan the strictly-between squares of a straight or diagonal ray for
/// blockers. Callers guarantee `from` and `to` share a ray.
fn ray_is_clear(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    let step_row = (to.0 - from.0).signum();
    let step_col = (to.1 - from.1).signum();
    let mut cursor = (from.0 + step_row, from.1 + step_col);
    while cursor != to {
        if !in_bounds(cursor) {
            return false;
        }
        if board.view(cursor).is_some() {
            return false;
        }
        cursor = (cursor.0 + step_row, cursor.1 + step_col);
    }
    true
}
