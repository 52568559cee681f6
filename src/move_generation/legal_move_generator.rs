//! Full legality filtering.
//!
//! Brute force by design: every pseudo-legal destination becomes a `Move`,
//! gets applied to a cloned board, and survives only if the mover's king is
//! not attacked afterwards. One board clone per candidate is the dominant
//! cost of the whole engine and is kept as the sole correctness mechanism
//! for discovered checks, pins, and castling through threats.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{BoardLocation, CastlingRights, Color, Move};
use crate::move_generation::attack_detection::is_king_in_check;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::pseudo_legal::moves_for;

/// Every legal move for `color` in the given position. Generated moves carry
/// `promotion: None`; applying one promotes to a queen by default.
pub fn legal_moves(
    board: &Board,
    color: Color,
    castling: &CastlingRights,
    en_passant: Option<BoardLocation>,
) -> Vec<Move> {
    let mut out = Vec::new();

    for (from, _) in board.pieces_of(color) {
        for to in moves_for(board, from, castling, en_passant) {
            let mv = Move::new(from, to);
            let next = apply_move(board, &mv);
            if !is_king_in_check(&next, color) {
                out.push(mv);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::coordinate::format_move;
    use crate::utils::fen_parser::parse_fen;

    fn legal_from_fen(fen: &str) -> (Vec<Move>, crate::utils::fen_parser::ParsedFen) {
        let parsed = parse_fen(fen).expect("FEN should parse");
        let moves = legal_moves(
            &parsed.board,
            parsed.turn,
            &parsed.castling,
            parsed.en_passant,
        );
        (moves, parsed)
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let (moves, _) = legal_from_fen(crate::utils::fen_parser::STARTING_POSITION_FEN);
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn every_legal_move_leaves_own_king_safe() {
        let fens = [
            crate::utils::fen_parser::STARTING_POSITION_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        ];
        for fen in fens {
            let (moves, parsed) = legal_from_fen(fen);
            for mv in &moves {
                let next = apply_move(&parsed.board, mv);
                assert!(
                    !is_king_in_check(&next, parsed.turn),
                    "move {} in {fen} leaves the king in check",
                    format_move(mv).unwrap()
                );
            }
        }
    }

    #[test]
    fn pinned_piece_cannot_expose_the_king() {
        // Light bishop on e2 is pinned by the rook on e8 against the king on e1.
        let (moves, _) = legal_from_fen("4r2k/8/8/8/8/8/4B3/4K3 w - - 0 1");
        assert!(moves
            .iter()
            .all(|mv| mv.from != (6, 4) || mv.to.1 == 4));
    }

    #[test]
    fn check_must_be_answered() {
        // Dark queen on e4 checks the e1 king; only king steps off the
        // e-file survive.
        let (moves, parsed) = legal_from_fen("4k3/8/8/8/4q3/8/3P4/4K3 w - - 0 1");
        assert!(is_king_in_check(&parsed.board, parsed.turn));
        assert!(!moves.is_empty());
        for mv in &moves {
            assert_eq!(mv.from, (7, 4), "only the king can resolve this check");
            let next = apply_move(&parsed.board, mv);
            assert!(!is_king_in_check(&next, parsed.turn));
        }
    }

    #[test]
    fn checkmate_has_no_legal_moves() {
        // Fool's mate.
        let (moves, parsed) =
            legal_from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(moves.is_empty());
        assert!(is_king_in_check(&parsed.board, parsed.turn));
    }

    #[test]
    fn stalemate_has_no_legal_moves_and_no_check() {
        // Classic queen stalemate: Dark to move, king cornered but unchecked.
        let (moves, parsed) = legal_from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(moves.is_empty());
        assert!(!is_king_in_check(&parsed.board, parsed.turn));
    }

    #[test]
    fn en_passant_is_offered_only_with_the_target_set() {
        let with_target = legal_from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").0;
        assert!(with_target
            .iter()
            .any(|mv| format_move(mv).unwrap() == "e5d6"));

        let without_target = legal_from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1").0;
        assert!(!without_target
            .iter()
            .any(|mv| format_move(mv).unwrap() == "e5d6"));
    }

    #[test]
    fn castling_survives_the_full_simulation() {
        let (moves, _) = legal_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let notations: Vec<String> = moves.iter().map(|mv| format_move(mv).unwrap()).collect();
        assert!(notations.contains(&"e1g1".to_string()));
        assert!(notations.contains(&"e1c1".to_string()));
    }
}
