//! yz-core: Yatzy roll validation, score categories, and per-category scoring.

pub mod category;
pub mod config;
pub mod dice;
pub mod scoring;


pub use category::{ParseCategoryError, ScoreCategory, NUM_CATS};
pub use config::{Config, ConfigError, ScoringConfig};
pub use dice::{Counts, DiceRoll, ParseRollError, ValidationError, FACE_MAX, FACE_MIN, NUM_DICE};
pub use scoring::{
    best_category, best_category_with, match_score, score, score_with, scores_for_roll,
    scores_for_roll_with,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
