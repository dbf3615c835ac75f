//! Matching against learned patterns.

use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::{debug, trace};

use super::types::{LearnedPattern, MatchResult, ScoreBreakdown};
use super::{Description, Matcher};
use crate::error::{check_confidence, MatchError};

impl Matcher {
    /// Score `text` against every learned pattern and rank the survivors.
    ///
    /// A pattern survives when its base score (overlap + similarity blend)
    /// reaches `min_confidence`. The weight boost is added afterwards, so a
    /// heavily confirmed pattern ranks higher on near-ties but can never clear
    /// the floor on weight alone.
    ///
    /// Ordering: score desc, then weight desc, then most recent `learned_at`.
    pub fn find_pattern_matches<'a>(
        &self,
        text: &str,
        patterns: &'a [LearnedPattern],
        min_confidence: f64,
    ) -> Result<Vec<MatchResult<'a, LearnedPattern>>, MatchError> {
        let min_confidence = check_confidence(min_confidence)?;
        let description = Description::new(text);

        let mut matches: Vec<_> = patterns
            .par_iter()
            .filter_map(|pattern| self.score_pattern(&description, pattern, min_confidence))
            .collect();
        matches.sort_by(rank_patterns);

        debug!(
            description = %description.canonical,
            candidates = patterns.len(),
            matched = matches.len(),
            min_confidence,
            "pattern matching complete"
        );
        Ok(matches)
    }

    fn score_pattern<'a>(
        &self,
        description: &Description,
        pattern: &'a LearnedPattern,
        min_confidence: f64,
    ) -> Option<MatchResult<'a, LearnedPattern>> {
        let (token_overlap, string_similarity) = self.compare(description, &pattern.tokens);
        let base = self.config.base_score(token_overlap, string_similarity);

        trace!(
            pattern = %pattern.tokens,
            ingredient = %pattern.ingredient_name,
            token_overlap,
            string_similarity,
            base,
            "scored pattern"
        );

        if base < min_confidence {
            return None;
        }

        let boost = if base > 0.0 {
            self.config.weight_boost(pattern.weight)
        } else {
            0.0
        };
        let score = (base + boost).min(1.0);
        // Report only the part of the boost that survived the clamp.
        let weight_boost = score - base;

        Some(MatchResult {
            subject: pattern,
            score,
            breakdown: ScoreBreakdown {
                token_overlap,
                string_similarity,
                weight_boost,
                alias: None,
            },
        })
    }
}

fn rank_patterns(a: &MatchResult<'_, LearnedPattern>, b: &MatchResult<'_, LearnedPattern>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.subject.weight.cmp(&a.subject.weight))
        .then_with(|| b.subject.learned_at.cmp(&a.subject.learned_at))
        .then_with(|| a.subject.ingredient_name.cmp(&b.subject.ingredient_name))
        .then_with(|| a.subject.ingredient_id.cmp(&b.subject.ingredient_id))
}

/// Rank `text` against `patterns` with the default coefficients.
pub fn find_pattern_matches<'a>(
    text: &str,
    patterns: &'a [LearnedPattern],
    min_confidence: f64,
) -> Result<Vec<MatchResult<'a, LearnedPattern>>, MatchError> {
    Matcher::new().find_pattern_matches(text, patterns, min_confidence)
}
