//! Ranking of invoice descriptions against learned patterns and the catalog.
//!
//! Both matchers share one pipeline: tokenize the description once, then for
//! each candidate token set compute the token overlap and the whole-string
//! similarity of the sorted canonical forms, and blend them per
//! [`MatchConfig`]. Every call is a pure function of its arguments.
//!
//! CHANGELOG:
//! - 10/19/2026 - Combined suggestions across patterns and catalog
//! - 10/19/2026 - Initial implementation

pub mod config;
pub mod ingredients;
pub mod patterns;
pub mod suggest;
pub mod types;

pub use config::MatchConfig;
pub use types::{
    IngredientId, IngredientInfo, LearnedPattern, MatchResult, ScoreBreakdown, Suggestion,
};

use crate::error::MatchError;
use crate::scoring::{similarity, weighted_token_score};
use crate::text::{tokenize, TokenSet};

/// Scores descriptions with a fixed, validated configuration.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    /// Create a matcher with the default coefficients.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with custom coefficients.
    pub fn with_config(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Token overlap and string similarity of a description against one candidate.
    fn compare(&self, description: &Description, candidate: &TokenSet) -> (f64, f64) {
        if description.tokens.is_empty() || candidate.is_empty() {
            return (0.0, 0.0);
        }
        let overlap = weighted_token_score(
            &description.tokens,
            candidate,
            self.config.recall_weight,
            self.config.token_match_threshold,
        );
        let string_similarity = similarity(&description.canonical, &candidate.canonical());
        (overlap, string_similarity)
    }
}

/// A tokenized description, prepared once per call.
#[derive(Debug)]
struct Description {
    tokens: TokenSet,
    canonical: String,
}

impl Description {
    fn new(text: &str) -> Self {
        let tokens = tokenize(text);
        let canonical = tokens.canonical();
        Self { tokens, canonical }
    }
}
