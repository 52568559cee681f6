//! Crate root module declarations for the Persona Chess engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! evaluation, opening tables, engines, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_types;
}

pub mod move_generation {
    pub mod attack_detection;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod pseudo_legal;
}

pub mod evaluation {
    pub mod board_scoring;
    pub mod personality;
    pub mod piece_square_tables;
}

pub mod tables {
    pub mod opening_book;
}

pub mod engines {
    pub mod engine_personality;
    pub mod engine_trait;
}

pub mod utils {
    pub mod coordinate;
    pub mod fen_parser;
    pub mod render_board;
}
