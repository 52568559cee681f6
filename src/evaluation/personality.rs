//! Tunable personality weights for move selection and evaluation.
//!
//! Every factor is an independent multiplier on one family of evaluation
//! terms; `level` drives how much randomness the selector applies on top of
//! the rankings. Callers may override any subset; unset factors keep the
//! baseline values below.

/// Personality factors plus the difficulty level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Personality {
    /// Scales the mobility-imbalance term in the middlegame.
    pub aggressiveness: f64,
    /// Scales the king-safety difference.
    pub defensiveness: f64,
    /// Scales the raw mobility difference.
    pub mobility: f64,
    /// Scales pawn-structure and center-control terms.
    pub positionality: f64,
    /// Carried on the input contract; reserved for selection policies.
    pub risk_taking: f64,
    /// Difficulty in `1..=10`. 10 plays the top candidate almost always;
    /// lower levels sample from a widening pool.
    pub level: u8,
}

impl Personality {
    pub const DEFAULT_AGGRESSIVENESS: f64 = 0.7;
    pub const DEFAULT_DEFENSIVENESS: f64 = 0.6;
    pub const DEFAULT_MOBILITY: f64 = 0.8;
    pub const DEFAULT_POSITIONALITY: f64 = 0.9;
    pub const DEFAULT_RISK_TAKING: f64 = 0.5;

    pub fn with_level(level: u8) -> Self {
        Self {
            level: level.clamp(1, 10),
            ..Self::default()
        }
    }
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            aggressiveness: Self::DEFAULT_AGGRESSIVENESS,
            defensiveness: Self::DEFAULT_DEFENSIVENESS,
            mobility: Self::DEFAULT_MOBILITY,
            positionality: Self::DEFAULT_POSITIONALITY,
            risk_taking: Self::DEFAULT_RISK_TAKING,
            level: 5,
        }
    }
}
