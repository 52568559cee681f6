//! Engine abstraction layer.
//!
//! Defines the common request and output payloads so different selection
//! strategies can sit behind a single trait interface. Callers own all game
//! bookkeeping (history, castling rights, en-passant target); the engine is a
//! pure function of the request plus its own randomness.

use crate::evaluation::personality::Personality;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{BoardLocation, CastlingRights, GamePhase, Move};

/// Everything an engine needs to pick one move.
#[derive(Debug, Clone)]
pub struct MoveRequest {
    pub board: Board,
    pub turn: crate::game_state::chess_types::Color,
    pub phase: GamePhase,
    pub personality: Personality,
    pub castling: CastlingRights,
    pub en_passant: Option<BoardLocation>,
    /// Coordinate-notation moves played so far, oldest first. Drives the
    /// opening book only.
    pub move_history: Vec<String>,
}

/// Terminal classification reported when no legal move exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Checkmate,
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct SelectorOutput {
    pub best_move: Option<Move>,
    pub status: GameStatus,
    pub info_lines: Vec<String>,
}

impl Default for SelectorOutput {
    fn default() -> Self {
        Self {
            best_move: None,
            status: GameStatus::Active,
            info_lines: Vec::new(),
        }
    }
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, request: &MoveRequest) -> Result<SelectorOutput, String>;
}
