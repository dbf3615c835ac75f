//! Edit-distance string similarity using strsim.
//!
//! CHANGELOG:
//! - 10/19/2026 - Levenshtein ratio lifted out of contact matching

use strsim::normalized_levenshtein;

/// Default threshold above which two tokens count as the same token.
pub const DEFAULT_TOKEN_THRESHOLD: f64 = 0.85;

/// Levenshtein ratio (0.0 - 1.0).
///
/// `1 - distance / max(len_a, len_b)` counted in chars. Two empty strings
/// are identical (1.0); an empty string against a non-empty one scores 0.0.
/// Symmetric.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// Similarity between two single tokens, zeroed below `threshold`.
///
/// Lets "breast" match "breasts" while keeping "eggs" and "egg" apart at the
/// default threshold.
pub fn token_similarity(a: &str, b: &str, threshold: f64) -> f64 {
    if a == b {
        return 1.0;
    }
    let score = similarity(a, b);
    if score >= threshold {
        score
    } else {
        0.0
    }
}
