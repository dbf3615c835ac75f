//! Weighted token-set overlap.

use crate::text::TokenSet;

use super::similarity::{token_similarity, DEFAULT_TOKEN_THRESHOLD};

/// Default share of the overlap score given to recall (pattern coverage).
pub const DEFAULT_RECALL_WEIGHT: f64 = 0.75;

/// Overlap score with the default recall weight and token threshold.
pub fn token_score(description: &TokenSet, pattern: &TokenSet) -> f64 {
    weighted_token_score(description, pattern, DEFAULT_RECALL_WEIGHT, DEFAULT_TOKEN_THRESHOLD)
}

/// Score how well `description` covers `pattern` (0.0 - 1.0).
///
/// recall: mean over pattern tokens of their best match in the description.
/// precision: mean over description tokens of their best match in the pattern.
/// The result is `recall_weight * recall + (1 - recall_weight) * precision`,
/// so a description that is a superset of the pattern still scores high
/// while one sharing a single incidental word does not.
///
/// Tokens match exactly, or fuzzily when their similarity reaches
/// `threshold`, in which case they contribute that similarity rather than 1.
/// Either set being empty scores 0.0.
pub fn weighted_token_score(
    description: &TokenSet,
    pattern: &TokenSet,
    recall_weight: f64,
    threshold: f64,
) -> f64 {
    if description.is_empty() || pattern.is_empty() {
        return 0.0;
    }

    let recall = coverage(pattern, description, threshold);
    let precision = coverage(description, pattern, threshold);

    (recall_weight * recall + (1.0 - recall_weight) * precision).clamp(0.0, 1.0)
}

/// Mean best-match score of each token in `from` against `against`.
fn coverage(from: &TokenSet, against: &TokenSet, threshold: f64) -> f64 {
    let total: f64 = from
        .iter()
        .map(|token| {
            if against.contains(token) {
                return 1.0;
            }
            against
                .iter()
                .map(|other| token_similarity(token, other, threshold))
                .fold(0.0, f64::max)
        })
        .sum();

    total / from.len() as f64
}
