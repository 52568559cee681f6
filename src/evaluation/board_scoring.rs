//! Multi-factor static evaluation.
//!
//! `evaluate` scores a position from Light's perspective in pawn units:
//! material plus piece-square tables always apply, and the remaining terms
//! are blended per game phase and scaled by the personality factors. The
//! result is rounded to two decimals, which also defines the granularity the
//! selector's "score gap" policy works at.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    in_bounds, BoardLocation, CastlingRights, Color, GamePhase, PieceKind,
};
use crate::evaluation::personality::Personality;
use crate::evaluation::piece_square_tables::{
    bonus, rank_from_own_back_rank, KING_ENDGAME_TABLE, PASSED_PAWN_BONUS,
};
use crate::move_generation::attack_detection::attacks;
use crate::move_generation::pseudo_legal::moves_for;

/// Base material values in pawn units.
pub const fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.25,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 100.0,
    }
}

const BISHOP_PAIR_BONUS: f64 = 0.3;
const OPEN_FILE_BONUS: f64 = 0.45;
const SEMI_OPEN_FILE_BONUS: f64 = 0.3;
const MOBILITY_UNIT: f64 = 0.01;

const CENTER: [BoardLocation; 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];

/// Score the position from Light's perspective.
pub fn evaluate(board: &Board, phase: GamePhase, personality: &Personality) -> f64 {
    let mut score = material_and_tables(board, phase);
    score += bishop_pair_term(board);
    score += rook_file_term(board);

    let mobility_diff =
        MOBILITY_UNIT * (mobility_count(board, Color::Light) - mobility_count(board, Color::Dark));
    let king_safety_diff = king_safety(board, Color::Light) - king_safety(board, Color::Dark);
    let pawn_diff = pawn_structure(board, Color::Light) - pawn_structure(board, Color::Dark);
    let passed_diff = passed_pawns(board, Color::Light) - passed_pawns(board, Color::Dark);
    let center_diff = center_control(board, Color::Light) - center_control(board, Color::Dark);

    match phase {
        GamePhase::Opening => {
            let development_diff =
                development_count(board, Color::Light) - development_count(board, Color::Dark);
            score += 0.15 * development_diff as f64;
            score += center_diff * personality.positionality;
            score += mobility_diff * personality.mobility * 0.5;
            score += pawn_diff * 0.5;
            score += king_safety_diff * personality.defensiveness * 0.5;
            score += passed_diff;
        }
        GamePhase::Middlegame => {
            score += king_safety_diff * personality.defensiveness;
            score += mobility_diff * personality.mobility;
            // Aggressive personalities lean harder on out-mobilizing the
            // opponent.
            score += mobility_diff * personality.aggressiveness * 0.5;
            score += pawn_diff * personality.positionality;
            score += center_diff * personality.positionality * 0.5;
            score += passed_diff;
        }
        GamePhase::Endgame => {
            score += king_centralization_diff(board) * 0.2;
            score += passed_diff * 1.5;
            score += mobility_diff * personality.mobility * 0.5;
            score += pawn_diff * personality.positionality;
            score += king_safety_diff * personality.defensiveness * 0.25;
        }
    }

    (score * 100.0).round() / 100.0
}

fn material_and_tables(board: &Board, phase: GamePhase) -> f64 {
    let mut score = 0.0;
    for color in [Color::Light, Color::Dark] {
        let sign = if color == Color::Light { 1.0 } else { -1.0 };
        for (location, piece) in board.pieces_of(color) {
            score += sign * (piece_value(piece.kind) + bonus(piece.kind, color, location, phase));
        }
    }
    score
}

fn bishop_pair_term(board: &Board) -> f64 {
    let mut score = 0.0;
    if board.count_of(Color::Light, PieceKind::Bishop) >= 2 {
        score += BISHOP_PAIR_BONUS;
    }
    if board.count_of(Color::Dark, PieceKind::Bishop) >= 2 {
        score -= BISHOP_PAIR_BONUS;
    }
    score
}

/// Rooks on files free of their own pawns: fully open files score higher
/// than semi-open ones.
fn rook_file_term(board: &Board) -> f64 {
    let mut score = 0.0;
    for color in [Color::Light, Color::Dark] {
        let sign = if color == Color::Light { 1.0 } else { -1.0 };
        for (location, piece) in board.pieces_of(color) {
            if piece.kind != PieceKind::Rook {
                continue;
            }
            let own_pawns = pawns_on_file(board, color, location.1);
            let enemy_pawns = pawns_on_file(board, color.opposite(), location.1);
            if own_pawns == 0 {
                score += sign
                    * if enemy_pawns == 0 {
                        OPEN_FILE_BONUS
                    } else {
                        SEMI_OPEN_FILE_BONUS
                    };
            }
        }
    }
    score
}

fn pawns_on_file(board: &Board, color: Color, col: i8) -> usize {
    (0..8i8)
        .filter(|row| {
            matches!(
                board.view((*row, col)),
                Some(p) if p.kind == PieceKind::Pawn && p.color == color
            )
        })
        .count()
}

/// Pseudo-legal destination count across all of a color's pieces. Castling
/// rights are deliberately forced all-false here, so the king's castling
/// squares never count toward mobility.
fn mobility_count(board: &Board, color: Color) -> f64 {
    let no_castling = CastlingRights::none();
    board
        .pieces_of(color)
        .iter()
        .map(|(location, _)| moves_for(board, *location, &no_castling, None).len())
        .sum::<usize>() as f64
}

fn king_safety(board: &Board, color: Color) -> f64 {
    let Some(king) = board.find_king(color) else {
        return 0.0;
    };
    let mut score = 0.0;

    // Pawn shield one rank in front, within one file.
    let shield_row = king.0 + color.forward();
    for d_col in -1i8..=1 {
        let square = (shield_row, king.1 + d_col);
        if !in_bounds(square) {
            continue;
        }
        if matches!(
            board.view(square),
            Some(p) if p.kind == PieceKind::Pawn && p.color == color
        ) {
            score += 0.15;
        }
    }

    // Recognized castled squares.
    let row = color.back_row();
    if king == (row, 6) || king == (row, 2) {
        score += 0.3;
    }

    // Enemy pressure inside the 5x5 box, scaled by inverse Chebyshev
    // distance.
    for (location, _) in board.pieces_of(color.opposite()) {
        let distance = (location.0 - king.0).abs().max((location.1 - king.1).abs());
        if (1..=2).contains(&distance) {
            score -= 0.15 / distance as f64;
        }
    }

    score
}

fn pawn_structure(board: &Board, color: Color) -> f64 {
    let pawns: Vec<BoardLocation> = board
        .pieces_of(color)
        .into_iter()
        .filter(|(_, p)| p.kind == PieceKind::Pawn)
        .map(|(location, _)| location)
        .collect();

    let mut score = 0.0;
    for &(row, col) in &pawns {
        if pawns.iter().any(|&(r, c)| c == col && r != row) {
            score -= 0.15; // doubled
        }
        let has_neighbor = pawns
            .iter()
            .any(|&(_, c)| (c - col).abs() == 1);
        if !has_neighbor {
            score -= 0.20; // isolated
        }
        let behind = row - color.forward();
        if pawns
            .iter()
            .any(|&(r, c)| r == behind && (c - col).abs() == 1)
        {
            score += 0.10; // supported
        }
    }
    score
}

fn passed_pawns(board: &Board, color: Color) -> f64 {
    let mut score = 0.0;
    for (location, piece) in board.pieces_of(color) {
        if piece.kind != PieceKind::Pawn {
            continue;
        }
        if is_passed(board, color, location) {
            score += PASSED_PAWN_BONUS[rank_from_own_back_rank(color, location)];
        }
    }
    score
}

/// No enemy pawn ahead on this file or either adjacent file.
fn is_passed(board: &Board, color: Color, pawn: BoardLocation) -> bool {
    let enemy = color.opposite();
    let forward = color.forward();
    for d_col in -1i8..=1 {
        let col = pawn.1 + d_col;
        if !(0..8).contains(&col) {
            continue;
        }
        let mut row = pawn.0 + forward;
        while (0..8).contains(&row) {
            if matches!(
                board.view((row, col)),
                Some(p) if p.kind == PieceKind::Pawn && p.color == enemy
            ) {
                return false;
            }
            row += forward;
        }
    }
    true
}

fn center_control(board: &Board, color: Color) -> f64 {
    let mut score = 0.0;
    for (location, _) in board.pieces_of(color) {
        if CENTER.contains(&location) {
            score += 0.15;
        } else if is_extended_center(location) {
            score += 0.05;
        }
        for &square in &CENTER {
            if attacks(board, location, square) {
                score += 0.05;
            }
        }
        for row in 2..=5i8 {
            for col in 2..=5i8 {
                let square = (row, col);
                if !CENTER.contains(&square) && attacks(board, location, square) {
                    score += 0.02;
                }
            }
        }
    }
    score
}

fn is_extended_center(x: BoardLocation) -> bool {
    (2..=5).contains(&x.0) && (2..=5).contains(&x.1) && !CENTER.contains(&x)
}

/// Minor pieces developed off the back rank.
fn development_count(board: &Board, color: Color) -> i32 {
    board
        .pieces_of(color)
        .iter()
        .filter(|(location, piece)| {
            matches!(piece.kind, PieceKind::Knight | PieceKind::Bishop)
                && location.0 != color.back_row()
        })
        .count() as i32
}

/// Endgame king activity, read from the endgame king table for both sides.
fn king_centralization_diff(board: &Board) -> f64 {
    let mut score = 0.0;
    if let Some(king) = board.find_king(Color::Light) {
        score += KING_ENDGAME_TABLE[rank_from_own_back_rank(Color::Light, king)][king.1 as usize];
    }
    if let Some(king) = board.find_king(Color::Dark) {
        score -= KING_ENDGAME_TABLE[rank_from_own_back_rank(Color::Dark, king)][king.1 as usize];
    }
    score
}
