//! ingredient-matcher library
//!
//! Reconciles free-text invoice line items against learned patterns and an
//! ingredient catalog: normalize -> expand shorthand -> tokenize -> score
//! (token overlap + edit-distance similarity) -> rank.
//!
//! Every entry point is a pure function of its inputs. Patterns and catalogs
//! are owned by the caller and only read here.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial library structure

// Engine
pub mod error;
pub mod matching;
pub mod scoring;
pub mod text;

// CLI support
pub mod catalog;
pub mod commands;
pub mod output;

pub use error::MatchError;
pub use matching::ingredients::find_ingredient_matches;
pub use matching::patterns::find_pattern_matches;
pub use matching::suggest::suggest;
pub use matching::{
    IngredientId, IngredientInfo, LearnedPattern, MatchConfig, MatchResult, Matcher,
    ScoreBreakdown, Suggestion,
};
pub use scoring::{similarity, token_score};
pub use text::{expand, normalize, tokenize, TokenSet};
