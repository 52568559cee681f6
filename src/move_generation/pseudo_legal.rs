//! Pseudo-legal destination generation for a single piece.
//!
//! Everything here obeys movement geometry only; apart from the king's
//! single-step pre-filter, a generated destination may still leave the own
//! king in check. The legality filter re-simulates every candidate, so both
//! layers stay in place deliberately.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    offset_location, BoardLocation, CastlingRights, Color, PieceKind,
};
use crate::move_generation::attack_detection::{is_attacked, is_king_in_check};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Candidate destination squares for the piece on `from`. Empty squares
/// yield an empty list.
pub fn moves_for(
    board: &Board,
    from: BoardLocation,
    castling: &CastlingRights,
    en_passant: Option<BoardLocation>,
) -> Vec<BoardLocation> {
    let Some(piece) = board.view(from) else {
        return Vec::new();
    };
    let piece = *piece;

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, en_passant),
        PieceKind::Knight => offset_moves(board, from, piece.color, &KNIGHT_OFFSETS),
        PieceKind::Bishop => ray_moves(board, from, piece.color, &BISHOP_DIRECTIONS),
        PieceKind::Rook => ray_moves(board, from, piece.color, &ROOK_DIRECTIONS),
        PieceKind::Queen => {
            let mut out = ray_moves(board, from, piece.color, &BISHOP_DIRECTIONS);
            out.extend(ray_moves(board, from, piece.color, &ROOK_DIRECTIONS));
            out
        }
        PieceKind::King => king_moves(board, from, piece.color, castling),
    }
}

fn pawn_moves(
    board: &Board,
    from: BoardLocation,
    color: Color,
    en_passant: Option<BoardLocation>,
) -> Vec<BoardLocation> {
    let mut out = Vec::new();
    let forward = color.forward();

    // Single step onto an empty square; double step from the start row when
    // both squares are empty.
    if let Ok(one) = offset_location(from, forward, 0) {
        if board.view(one).is_none() {
            out.push(one);
            if from.0 == color.pawn_start_row() {
                if let Ok(two) = offset_location(from, forward * 2, 0) {
                    if board.view(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Ok(target) = offset_location(from, forward, d_col) else {
            continue;
        };

        match board.view(target) {
            Some(occupant) => {
                if occupant.color != color {
                    out.push(target);
                }
            }
            None => {
                // En-passant: the capture square is empty; the victim pawn
                // sits beside us on the flanking square.
                if en_passant == Some(target) {
                    let flank = (from.0, target.1);
                    if let Some(victim) = board.view(flank) {
                        if victim.kind == PieceKind::Pawn && victim.color != color {
                            out.push(target);
                        }
                    }
                }
            }
        }
    }

    out
}

fn offset_moves(
    board: &Board,
    from: BoardLocation,
    color: Color,
    offsets: &[(i8, i8)],
) -> Vec<BoardLocation> {
    let mut out = Vec::new();
    for (d_row, d_col) in offsets {
        let Ok(target) = offset_location(from, *d_row, *d_col) else {
            continue;
        };
        match board.view(target) {
            Some(occupant) if occupant.color == color => (),
            _ => out.push(target),
        }
    }
    out
}

fn ray_moves(
    board: &Board,
    from: BoardLocation,
    color: Color,
    directions: &[(i8, i8)],
) -> Vec<BoardLocation> {
    let mut out = Vec::new();
    for (d_row, d_col) in directions {
        let mut cursor = from;
        while let Ok(next) = offset_location(cursor, *d_row, *d_col) {
            match board.view(next) {
                None => {
                    out.push(next);
                    cursor = next;
                }
                Some(occupant) => {
                    if occupant.color != color {
                        out.push(next);
                    }
                    break;
                }
            }
        }
    }
    out
}

fn king_moves(
    board: &Board,
    from: BoardLocation,
    color: Color,
    castling: &CastlingRights,
) -> Vec<BoardLocation> {
    let enemy = color.opposite();
    let mut out = Vec::new();

    // Single steps are pre-filtered against attacked squares. This only
    // covers plain king steps; the legality filter re-simulates everything
    // else (and catches the king stepping along its own attacker's ray).
    for (d_row, d_col) in KING_OFFSETS {
        let Ok(target) = offset_location(from, d_row, d_col) else {
            continue;
        };
        if let Some(occupant) = board.view(target) {
            if occupant.color == color {
                continue;
            }
        }
        if !is_attacked(board, target, enemy) {
            out.push(target);
        }
    }

    // Castling, encoded as a two-square king move. The rook relocation
    // happens when the move is applied.
    let home = (color.back_row(), 4);
    if from == home && !is_king_in_check(board, color) {
        let row = color.back_row();

        if castling.kingside(color)
            && board.view((row, 5)).is_none()
            && board.view((row, 6)).is_none()
            && rook_on(board, (row, 7), color)
            && !is_attacked(board, (row, 5), enemy)
            && !is_attacked(board, (row, 6), enemy)
        {
            out.push((row, 6));
        }

        if castling.queenside(color)
            && board.view((row, 1)).is_none()
            && board.view((row, 2)).is_none()
            && board.view((row, 3)).is_none()
            && rook_on(board, (row, 0), color)
            && !is_attacked(board, (row, 3), enemy)
            && !is_attacked(board, (row, 2), enemy)
        {
            out.push((row, 2));
        }
    }

    out
}

fn rook_on(board: &Board, square: BoardLocation, color: Color) -> bool {
    matches!(
        board.view(square),
        Some(piece) if piece.kind == PieceKind::Rook && piece.color == color
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::coordinate::coordinate_to_location;
    use crate::utils::fen_parser::parse_fen;

    fn destinations(fen: &str, square: &str) -> Vec<BoardLocation> {
        let parsed = parse_fen(fen).expect("FEN should parse");
        moves_for(
            &parsed.board,
            coordinate_to_location(square).unwrap(),
            &parsed.castling,
            parsed.en_passant,
        )
    }

    fn contains(moves: &[BoardLocation], square: &str) -> bool {
        moves.contains(&coordinate_to_location(square).unwrap())
    }

    #[test]
    fn pawn_double_step_requires_start_row_and_empty_path() {
        let start = destinations(crate::utils::fen_parser::STARTING_POSITION_FEN, "e2");
        assert!(contains(&start, "e3"));
        assert!(contains(&start, "e4"));

        // Pawn already advanced: no double step.
        let advanced = destinations("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1", "e3");
        assert!(contains(&advanced, "e4"));
        assert_eq!(advanced.len(), 1);

        // Blocker on the transit square kills both steps.
        let blocked = destinations("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", "e2");
        assert!(blocked.is_empty());

        // Blocker on the landing square kills only the double step.
        let far_blocked = destinations("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", "e2");
        assert!(contains(&far_blocked, "e3"));
        assert!(!contains(&far_blocked, "e4"));
    }

    #[test]
    fn pawn_captures_enemy_diagonals_only() {
        let moves = destinations("4k3/8/8/8/8/3n1N2/4P3/4K3 w - - 0 1", "e2");
        assert!(contains(&moves, "d3")); // enemy knight
        assert!(!contains(&moves, "f3")); // friendly knight
        assert!(contains(&moves, "e3"));
    }

    #[test]
    fn en_passant_requires_enemy_pawn_on_flank() {
        let moves = destinations(
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
            "e5",
        );
        assert!(contains(&moves, "d6"));

        // Same target square but no pawn on the flank: no en-passant.
        let no_flank = destinations("4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1", "e5");
        assert!(!contains(&no_flank, "d6"));
    }

    #[test]
    fn knight_moves_exclude_friendly_squares() {
        let moves = destinations(crate::utils::fen_parser::STARTING_POSITION_FEN, "g1");
        assert!(contains(&moves, "f3"));
        assert!(contains(&moves, "h3"));
        assert_eq!(moves.len(), 2); // e2 is friendly
    }

    #[test]
    fn rook_rays_include_capture_square_and_stop() {
        let moves = destinations("4k3/8/8/4p3/8/8/8/R3K3 b - - 0 1", "a1");
        assert!(contains(&moves, "a8"));
        assert!(contains(&moves, "d1"));
        assert!(!contains(&moves, "e1")); // friendly king blocks
    }

    #[test]
    fn king_steps_are_prefiltered_against_attacks() {
        // Dark rook on e8 covers the whole e-file: the king cannot step onto it.
        let moves = destinations("4r2k/8/8/8/8/8/8/3K4 w - - 0 1", "d1");
        assert!(!contains(&moves, "e1"));
        assert!(!contains(&moves, "e2"));
        assert!(contains(&moves, "c1"));
        assert!(contains(&moves, "d2"));
    }

    #[test]
    fn castling_generated_only_when_every_condition_holds() {
        let both = destinations("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1");
        assert!(contains(&both, "g1"));
        assert!(contains(&both, "c1"));

        // Rights revoked.
        let no_rights = destinations("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1", "e1");
        assert!(!contains(&no_rights, "g1"));
        assert!(!contains(&no_rights, "c1"));

        // Interior square occupied.
        let blocked = destinations("r3k2r/8/8/8/8/8/8/R3KB1R w KQkq - 0 1", "e1");
        assert!(!contains(&blocked, "g1"));
        assert!(contains(&blocked, "c1"));

        // Rook missing from its expected file.
        let no_rook = destinations("r3k2r/8/8/8/8/8/8/4K2R w KQkq - 0 1", "e1");
        assert!(contains(&no_rook, "g1"));
        assert!(!contains(&no_rook, "c1"));

        // Transit square attacked (dark rook on f8 covers f1).
        let transit_attacked = destinations("5r1k/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1");
        assert!(!contains(&transit_attacked, "g1"));
        assert!(contains(&transit_attacked, "c1"));

        // King currently in check: no castling either way.
        let in_check = destinations("4r2k/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1");
        assert!(!contains(&in_check, "g1"));
        assert!(!contains(&in_check, "c1"));
    }
}
