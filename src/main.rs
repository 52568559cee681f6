//! Self-play demonstration.
//!
//! Pits two personalities against each other from the starting position and
//! prints a move-by-move report. The loop owns all game bookkeeping the
//! engine deliberately does not: move history, castling rights, the
//! en-passant target, and the phase heuristic.
//!
//! Run with `cargo run --release`.

use chrono::Local;

use persona_chess::engines::engine_personality::PersonalityEngine;
use persona_chess::engines::engine_trait::{Engine, GameStatus, MoveRequest};
use persona_chess::evaluation::board_scoring::evaluate;
use persona_chess::evaluation::personality::Personality;
use persona_chess::game_state::board::Board;
use persona_chess::game_state::chess_types::{
    BoardLocation, CastlingRights, Color, GamePhase, Move, PieceKind,
};
use persona_chess::move_generation::legal_move_apply::apply_move;
use persona_chess::utils::coordinate::format_move;
use persona_chess::utils::render_board::render_board;

const MAX_PLIES: usize = 200;

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    let mut light = PersonalityEngine::seeded(0xC0FFEE);
    let mut dark = PersonalityEngine::seeded(0xBEEF);

    let light_personality = Personality {
        aggressiveness: 1.0,
        level: 8,
        ..Personality::default()
    };
    let dark_personality = Personality {
        defensiveness: 1.0,
        positionality: 1.0,
        level: 6,
        ..Personality::default()
    };

    println!(
        "persona_chess self-play, started {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "Light: {} (level {})  vs  Dark: {} (level {})",
        light.name(),
        light_personality.level,
        dark.name(),
        dark_personality.level
    );

    let mut board = Board::new_game();
    let mut turn = Color::Light;
    let mut castling = CastlingRights::all();
    let mut en_passant: Option<BoardLocation> = None;
    let mut history: Vec<String> = Vec::new();

    let mut final_status = GameStatus::Active;

    for ply in 0..MAX_PLIES {
        let (engine, personality): (&mut PersonalityEngine, Personality) = match turn {
            Color::Light => (&mut light, light_personality),
            Color::Dark => (&mut dark, dark_personality),
        };

        let request = MoveRequest {
            board: board.clone(),
            turn,
            phase: phase_of(&board, &history),
            personality,
            castling,
            en_passant,
            move_history: history.clone(),
        };

        let out = engine.choose_move(&request)?;
        if verbose {
            for line in &out.info_lines {
                println!("{line}");
            }
        }

        let Some(mv) = out.best_move else {
            final_status = out.status;
            break;
        };

        let notation = format_move(&mv).map_err(|e| e.to_string())?;
        en_passant = en_passant_target(&board, &mv);
        update_castling_rights(&mut castling, &board, &mv);
        board = apply_move(&board, &mv);
        history.push(notation.clone());

        let score = evaluate(&board, phase_of(&board, &history), &personality);
        println!("{:>3}. {turn:?} plays {notation}  (eval {score:+.2})", ply + 1);
        if verbose {
            println!("{}\n", render_board(&board));
        }

        turn = turn.opposite();
    }

    println!("\n{}\n", render_board(&board));
    match final_status {
        GameStatus::Checkmate => println!("Checkmate. {:?} wins.", turn.opposite()),
        GameStatus::Stalemate => println!("Stalemate."),
        GameStatus::Active => println!("Stopped after {MAX_PLIES} plies."),
    }
    println!(
        "finished {} after {} plies",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        history.len()
    );
    Ok(())
}

/// Coarse phase heuristic for the demo loop: book-depth plies are the
/// opening, queenless or sparse boards are the endgame, everything between
/// is the middlegame.
fn phase_of(board: &Board, history: &[String]) -> GamePhase {
    if history.len() < 16 {
        return GamePhase::Opening;
    }
    let queens = board.count_of(Color::Light, PieceKind::Queen)
        + board.count_of(Color::Dark, PieceKind::Queen);
    let pieces =
        board.pieces_of(Color::Light).len() + board.pieces_of(Color::Dark).len();
    if queens == 0 || pieces <= 12 {
        GamePhase::Endgame
    } else {
        GamePhase::Middlegame
    }
}

/// Double pawn steps open an en-passant target on the square skipped over;
/// every other move clears it.
fn en_passant_target(board: &Board, mv: &Move) -> Option<BoardLocation> {
    let piece = (*board.view(mv.from))?;
    if piece.kind == PieceKind::Pawn && (mv.to.0 - mv.from.0).abs() == 2 {
        Some(((mv.from.0 + mv.to.0) / 2, mv.from.1))
    } else {
        None
    }
}

/// Moving the king forfeits both rights; moving a rook off its home corner,
/// or capturing a rook sitting on one, forfeits that side's right.
fn update_castling_rights(castling: &mut CastlingRights, board: &Board, mv: &Move) {
    if let Some(piece) = board.view(mv.from) {
        match piece.kind {
            PieceKind::King => match piece.color {
                Color::Light => {
                    castling.king_light = false;
                    castling.queen_light = false;
                }
                Color::Dark => {
                    castling.king_dark = false;
                    castling.queen_dark = false;
                }
            },
            PieceKind::Rook => clear_corner_right(castling, mv.from),
            _ => {}
        }
    }
    // A capture on a rook's home corner kills that right even if the rook
    // already left and returned; stale rights are harmless here because the
    // move generator re-checks rook presence.
    clear_corner_right(castling, mv.to);
}

fn clear_corner_right(castling: &mut CastlingRights, corner: BoardLocation) {
    match corner {
        (7, 0) => castling.queen_light = false,
        (7, 7) => castling.king_light = false,
        (0, 0) => castling.queen_dark = false,
        (0, 7) => castling.king_dark = false,
        _ => {}
    }
}
