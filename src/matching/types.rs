//! Matchable subjects and match results.
//!
//! CHANGELOG:
//! - 10/19/2026 - Added learn/reinforce helpers for confirmed matches
//! - 10/19/2026 - Initial implementation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::text::{tokenize, TokenSet};

/// Opaque catalog identifier.
pub type IngredientId = Uuid;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientInfo {
    pub id: IngredientId,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub category: String,
    /// Alternate names (brand shorthand, abbreviations), scored like `name`.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl IngredientInfo {
    pub fn new(id: IngredientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sku: String::new(),
            category: String::new(),
            aliases: Vec::new(),
        }
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }
}

/// A historically confirmed mapping from a token pattern to an ingredient.
///
/// Owned by the caller. The engine only reads it; bumping `weight` after a
/// confirmed match is done through [`LearnedPattern::reinforced`] and stored
/// by whoever owns the pattern collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnedPattern {
    pub tokens: TokenSet,
    pub ingredient_id: IngredientId,
    pub ingredient_name: String,
    #[serde(default)]
    pub ingredient_sku: String,
    /// Number of confirmations.
    #[serde(default)]
    pub weight: u32,
    pub learned_at: DateTime<Utc>,
}

impl LearnedPattern {
    /// Build a fresh pattern from a description the user just confirmed.
    pub fn learn(description: &str, ingredient: &IngredientInfo, learned_at: DateTime<Utc>) -> Self {
        Self {
            tokens: tokenize(description),
            ingredient_id: ingredient.id,
            ingredient_name: ingredient.name.clone(),
            ingredient_sku: ingredient.sku.clone(),
            weight: 1,
            learned_at,
        }
    }

    /// Copy of this pattern with one more confirmation recorded.
    pub fn reinforced(&self, confirmed_at: DateTime<Utc>) -> Self {
        Self {
            weight: self.weight.saturating_add(1),
            learned_at: confirmed_at,
            ..self.clone()
        }
    }
}

/// How a score was put together.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub token_overlap: f64,
    pub string_similarity: f64,
    pub weight_boost: f64,
    /// Alias that produced an ingredient's best score; `None` for the canonical name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// A scored candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a, S> {
    pub subject: &'a S,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// A suggestion from either matcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion<'a> {
    Pattern(MatchResult<'a, LearnedPattern>),
    Ingredient(MatchResult<'a, IngredientInfo>),
}

impl<'a> Suggestion<'a> {
    pub fn score(&self) -> f64 {
        match self {
            Suggestion::Pattern(m) => m.score,
            Suggestion::Ingredient(m) => m.score,
        }
    }

    pub fn ingredient_id(&self) -> IngredientId {
        match self {
            Suggestion::Pattern(m) => m.subject.ingredient_id,
            Suggestion::Ingredient(m) => m.subject.id,
        }
    }

    pub fn ingredient_name(&self) -> &'a str {
        match self {
            Suggestion::Pattern(m) => &m.subject.ingredient_name,
            Suggestion::Ingredient(m) => &m.subject.name,
        }
    }
}
