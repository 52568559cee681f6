//! Fixed opening book.
//!
//! The book maps a space-joined history of coordinate-notation moves to one
//! canonical reply in the same notation. Lookup is exact-string only: no
//! transposition handling, no fuzzy matching. The table is immutable,
//! initialized once, and lives for the whole process.
//!
//! A hit is only a suggestion. The selector still parses it and checks it
//! against the current legal move set before playing it; anything that fails
//! either step is bypassed in favor of full evaluation.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static OPENING_BOOK: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // First moves.
        ("", "e2e4"),
        ("e2e4", "e7e5"),
        ("d2d4", "d7d5"),
        ("c2c4", "e7e5"),
        ("g1f3", "d7d5"),
        // Open games and the Ruy Lopez.
        ("e2e4 e7e5", "g1f3"),
        ("e2e4 e7e5 g1f3", "b8c6"),
        ("e2e4 e7e5 g1f3 b8c6", "f1b5"),
        ("e2e4 e7e5 g1f3 b8c6 f1b5", "a7a6"),
        ("e2e4 e7e5 g1f3 b8c6 f1b5 a7a6", "b5a4"),
        ("e2e4 e7e5 g1f3 b8c6 f1b5 a7a6 b5a4", "g8f6"),
        ("e2e4 e7e5 g1f3 b8c6 f1c4", "f8c5"),
        // Sicilian.
        ("e2e4 c7c5", "g1f3"),
        ("e2e4 c7c5 g1f3", "d7d6"),
        ("e2e4 c7c5 g1f3 d7d6", "d2d4"),
        ("e2e4 c7c5 g1f3 d7d6 d2d4", "c5d4"),
        ("e2e4 c7c5 g1f3 d7d6 d2d4 c5d4", "f3d4"),
        ("e2e4 c7c5 g1f3 d7d6 d2d4 c5d4 f3d4", "g8f6"),
        // French and Caro-Kann.
        ("e2e4 e7e6", "d2d4"),
        ("e2e4 e7e6 d2d4", "d7d5"),
        ("e2e4 c7c6", "d2d4"),
        ("e2e4 c7c6 d2d4", "d7d5"),
        // Queen's Gambit.
        ("d2d4 d7d5", "c2c4"),
        ("d2d4 d7d5 c2c4", "e7e6"),
        ("d2d4 d7d5 c2c4 e7e6", "b1c3"),
        ("d2d4 d7d5 c2c4 e7e6 b1c3", "g8f6"),
        // Indian defenses.
        ("d2d4 g8f6", "c2c4"),
        ("d2d4 g8f6 c2c4", "e7e6"),
        ("d2d4 g8f6 c2c4 e7e6", "g2g3"),
        ("d2d4 g8f6 c2c4 g7g6", "b1c3"),
        // English.
        ("c2c4 e7e5", "b1c3"),
        ("c2c4 e7e5 b1c3", "g8f6"),
    ])
});

/// Look up the canonical reply for a space-joined history key.
pub fn lookup(history_key: &str) -> Option<&'static str> {
    OPENING_BOOK.get(history_key).copied()
}

/// Build the lookup key from an ordered move-history list.
pub fn history_key(moves: &[String]) -> String {
    moves.join(" ")
}
