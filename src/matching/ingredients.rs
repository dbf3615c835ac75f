//! Matching against the ingredient catalog.

use rayon::prelude::*;
use std::cmp::Ordering;
use std::iter;
use tracing::{debug, trace};

use super::types::{IngredientInfo, MatchResult, ScoreBreakdown};
use super::{Description, Matcher};
use crate::error::{check_confidence, MatchError};
use crate::text::{normalize, tokenize};

impl Matcher {
    /// Score `text` against every catalog entry and rank the survivors.
    ///
    /// Each candidate is scored against its name and each alias
    /// independently; the best of those is the candidate's score. An alias
    /// hit is worth exactly as much as a name hit.
    ///
    /// Ordering: score desc, then normalized name, then id.
    pub fn find_ingredient_matches<'a>(
        &self,
        text: &str,
        candidates: &'a [IngredientInfo],
        min_confidence: f64,
    ) -> Result<Vec<MatchResult<'a, IngredientInfo>>, MatchError> {
        let min_confidence = check_confidence(min_confidence)?;
        let description = Description::new(text);

        let mut matches: Vec<_> = candidates
            .par_iter()
            .map(|candidate| self.score_ingredient(&description, candidate))
            .filter(|m| m.score >= min_confidence)
            .collect();
        matches.sort_by(rank_ingredients);

        debug!(
            description = %description.canonical,
            candidates = candidates.len(),
            matched = matches.len(),
            min_confidence,
            "ingredient matching complete"
        );
        Ok(matches)
    }

    fn score_ingredient<'a>(
        &self,
        description: &Description,
        candidate: &'a IngredientInfo,
    ) -> MatchResult<'a, IngredientInfo> {
        let names = iter::once((None, candidate.name.as_str())).chain(
            candidate
                .aliases
                .iter()
                .map(|alias| (Some(alias.as_str()), alias.as_str())),
        );

        let mut best = MatchResult {
            subject: candidate,
            score: 0.0,
            breakdown: ScoreBreakdown::default(),
        };
        let mut first = true;

        for (alias, name) in names {
            let (token_overlap, string_similarity) = self.compare(description, &tokenize(name));
            let score = self.config.base_score(token_overlap, string_similarity);

            trace!(
                ingredient = %candidate.name,
                name,
                token_overlap,
                string_similarity,
                score,
                "scored ingredient name"
            );

            // Strictly greater, so the canonical name wins ties with its aliases.
            if first || score > best.score {
                best.score = score;
                best.breakdown = ScoreBreakdown {
                    token_overlap,
                    string_similarity,
                    weight_boost: 0.0,
                    alias: alias.map(str::to_string),
                };
                first = false;
            }
        }

        best
    }
}

fn rank_ingredients(a: &MatchResult<'_, IngredientInfo>, b: &MatchResult<'_, IngredientInfo>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| normalize(&a.subject.name).cmp(&normalize(&b.subject.name)))
        .then_with(|| a.subject.id.cmp(&b.subject.id))
}

/// Rank `text` against `candidates` with the default coefficients.
pub fn find_ingredient_matches<'a>(
    text: &str,
    candidates: &'a [IngredientInfo],
    min_confidence: f64,
) -> Result<Vec<MatchResult<'a, IngredientInfo>>, MatchError> {
    Matcher::new().find_ingredient_matches(text, candidates, min_confidence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn ingredient(name: &str, aliases: &[&str]) -> IngredientInfo {
        IngredientInfo::new(Uuid::new_v4(), name).with_aliases(aliases.iter().copied())
    }

    fn catalog() -> Vec<IngredientInfo> {
        vec![
            ingredient("Extra Virgin Olive Oil", &["EVOO", "Olive Oil"]),
            ingredient("Chicken Breast", &["CHKN BRST"]),
            ingredient("Ground Beef", &["Hamburger"]),
            ingredient("Large Brown Eggs", &[]),
            ingredient("Heavy Cream", &[]),
        ]
    }

    #[test]
    fn test_evoo_scenario() {
        let candidates = vec![ingredient("Extra Virgin Olive Oil", &["EVOO", "Olive Oil"])];
        let matches = find_ingredient_matches("EVOO 1 Liter", &candidates, 0.3).unwrap();
        assert!(!matches.is_empty());
        assert_eq!(matches[0].subject.name, "Extra Virgin Olive Oil");
    }

    #[test]
    fn test_evoo_ranks_first_in_catalog() {
        let candidates = catalog();
        let matches = find_ingredient_matches("EVOO 1 Liter", &candidates, 0.3).unwrap();
        assert_eq!(matches[0].subject.name, "Extra Virgin Olive Oil");
        assert!(matches.iter().all(|m| m.subject.name != "Ground Beef"));
    }

    #[test]
    fn test_alias_is_full_strength() {
        let candidates = vec![ingredient("Ground Beef", &["Hamburger"])];
        let by_alias = find_ingredient_matches("Hamburger", &candidates, 0.0).unwrap();
        let by_name = find_ingredient_matches("Ground Beef", &candidates, 0.0).unwrap();
        assert_eq!(by_alias[0].score, 1.0);
        assert_eq!(by_alias[0].score, by_name[0].score);
        assert_eq!(by_alias[0].breakdown.alias.as_deref(), Some("Hamburger"));
        assert_eq!(by_name[0].breakdown.alias, None);
    }

    #[test]
    fn test_ties_break_on_normalized_name() {
        let candidates = vec![
            ingredient("Zesty Beef", &["beef"]),
            ingredient("Angus Beef", &["BEEF"]),
        ];
        let matches = find_ingredient_matches("beef", &candidates, 0.5).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].score, matches[1].score);
        assert_eq!(matches[0].subject.name, "Angus Beef");
    }

    #[test]
    fn test_scores_ordered_and_above_floor() {
        let candidates = catalog();
        for text in ["Org Lg Brown Eggs 24ct", "chkn brst", "hvy crm qt", "olive oil"] {
            for min in [0.0, 0.25, 0.5, 0.75] {
                let matches = find_ingredient_matches(text, &candidates, min).unwrap();
                for m in &matches {
                    assert!(m.score >= min && m.score <= 1.0, "score {} for {:?}", m.score, text);
                }
                for pair in matches.windows(2) {
                    assert!(pair[0].score >= pair[1].score, "out of order for {:?}", text);
                }
            }
        }
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let candidates = catalog();
        let matches = find_ingredient_matches("Paper Towels 12 Rolls", &candidates, 0.5).unwrap();
        assert!(matches.is_empty(), "matches: {:?}", matches);
        assert!(find_ingredient_matches("anything", &[], 0.5).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_bad_confidence() {
        assert_eq!(
            find_ingredient_matches("eggs", &catalog(), -0.5).unwrap_err(),
            MatchError::InvalidConfidence(-0.5)
        );
    }
}
