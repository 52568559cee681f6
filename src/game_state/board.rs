//! Mailbox board representation.
//!
//! `Board` is a plain 8x8 grid of optional piece records with value
//! semantics: legality filtering and evaluation both work on independent
//! clones, so nothing here is ever shared or aliased between candidates.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{BoardLocation, Color, PieceKind, PieceRecord};
use crate::utils::fen_parser::{parse_fen, STARTING_POSITION_FEN};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    cells: [[Option<PieceRecord>; 8]; 8],
}

impl Board {
    pub fn view(&self, x: BoardLocation) -> &Option<PieceRecord> {
        &self.cells[x.0 as usize][x.1 as usize]
    }

    pub fn at(&mut self, x: BoardLocation) -> &mut Option<PieceRecord> {
        &mut self.cells[x.0 as usize][x.1 as usize]
    }

    /// Place a piece on an empty square. Used by FEN parsing and test setup.
    pub fn place(&mut self, piece: PieceRecord, x: BoardLocation) -> Result<(), ChessErrors> {
        if self.view(x).is_some() {
            return Err(ChessErrors::BoardLocationOccupied(x));
        }
        *self.at(x) = Some(piece);
        Ok(())
    }

    pub fn remove(&mut self, x: BoardLocation) -> Option<PieceRecord> {
        self.at(x).take()
    }

    /// Every occupied square of `color`, scanned row-major.
    pub fn pieces_of(&self, color: Color) -> Vec<(BoardLocation, PieceRecord)> {
        let mut out = Vec::new();
        for row in 0..8i8 {
            for col in 0..8i8 {
                if let Some(piece) = self.view((row, col)) {
                    if piece.color == color {
                        out.push(((row, col), *piece));
                    }
                }
            }
        }
        out
    }

    /// Locate the king of `color`. `None` is a legal degraded state: callers
    /// treat it as "not in check" rather than an error.
    pub fn find_king(&self, color: Color) -> Option<BoardLocation> {
        for row in 0..8i8 {
            for col in 0..8i8 {
                if let Some(piece) = self.view((row, col)) {
                    if piece.kind == PieceKind::King && piece.color == color {
                        return Some((row, col));
                    }
                }
            }
        }
        None
    }

    pub fn count_of(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces_of(color)
            .iter()
            .filter(|(_, p)| p.kind == kind)
            .count()
    }

    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN)
            .expect("starting FEN should always parse")
            .board
    }
}
