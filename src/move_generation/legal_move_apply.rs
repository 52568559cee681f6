//! Move application with full side-effect handling.
//!
//! `apply_move` works on a cloned board value and handles the three special
//! cases a plain from/to copy misses: promotion (defaulting to queen),
//! en-passant victim removal from its actual square, and rook relocation on
//! two-square king moves. Both the legality filter and candidate evaluation
//! go through this one function so their side effects never diverge.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, PieceKind};

/// Apply `mv` to a clone of `board` and return the resulting position. An
/// empty source square returns an unchanged clone; the legality filter never
/// produces one.
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    let mut next = board.clone();
    let Some(mut piece) = next.remove(mv.from) else {
        return next;
    };

    match piece.kind {
        PieceKind::Pawn => {
            // Diagonal move onto an empty square is en-passant: the captured
            // pawn sits on the flanking square, not the destination.
            if mv.from.1 != mv.to.1 && next.view(mv.to).is_none() {
                next.remove((mv.from.0, mv.to.1));
            }
            if mv.to.0 == piece.color.promotion_row() {
                piece.kind = mv.promotion.unwrap_or(PieceKind::Queen);
            }
        }
        PieceKind::King => {
            // A two-square king move is castling; relocate the rook too.
            if mv.to.1 - mv.from.1 == 2 {
                let rook = next.remove((mv.from.0, 7));
                *next.at((mv.from.0, 5)) = rook;
            } else if mv.from.1 - mv.to.1 == 2 {
                let rook = next.remove((mv.from.0, 0));
                *next.at((mv.from.0, 3)) = rook;
            }
        }
        _ => (),
    }

    *next.at(mv.to) = Some(piece);
    next
}
