//! Combined suggestions from learned patterns and the catalog.

use std::collections::HashSet;
use tracing::debug;

use super::types::{IngredientInfo, LearnedPattern, Suggestion};
use super::Matcher;
use crate::error::MatchError;

impl Matcher {
    /// Run both matchers and merge their results, one entry per ingredient.
    ///
    /// Ordered by score; on equal scores a learned pattern outranks a catalog
    /// hit for the same or another ingredient. Within each kind the order of
    /// the individual matcher is kept. Only the best entry per ingredient id
    /// survives.
    pub fn suggest<'a>(
        &self,
        text: &str,
        patterns: &'a [LearnedPattern],
        catalog: &'a [IngredientInfo],
        min_confidence: f64,
    ) -> Result<Vec<Suggestion<'a>>, MatchError> {
        let mut suggestions: Vec<Suggestion<'a>> = self
            .find_pattern_matches(text, patterns, min_confidence)?
            .into_iter()
            .map(Suggestion::Pattern)
            .chain(
                self.find_ingredient_matches(text, catalog, min_confidence)?
                    .into_iter()
                    .map(Suggestion::Ingredient),
            )
            .collect();

        // Stable sort keeps each matcher's own tie-break order.
        suggestions.sort_by(|a, b| {
            b.score()
                .total_cmp(&a.score())
                .then_with(|| kind_rank(a).cmp(&kind_rank(b)))
        });

        let mut seen = HashSet::new();
        suggestions.retain(|s| seen.insert(s.ingredient_id()));

        debug!(suggestions = suggestions.len(), "merged suggestions");
        Ok(suggestions)
    }
}

fn kind_rank(suggestion: &Suggestion<'_>) -> u8 {
    match suggestion {
        Suggestion::Pattern(_) => 0,
        Suggestion::Ingredient(_) => 1,
    }
}

/// Merged suggestions with the default coefficients.
pub fn suggest<'a>(
    text: &str,
    patterns: &'a [LearnedPattern],
    catalog: &'a [IngredientInfo],
    min_confidence: f64,
) -> Result<Vec<Suggestion<'a>>, MatchError> {
    Matcher::new().suggest(text, patterns, catalog, min_confidence)
}
