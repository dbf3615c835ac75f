//! Tunable matcher coefficients.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::scoring::overlap::DEFAULT_RECALL_WEIGHT;
use crate::scoring::similarity::DEFAULT_TOKEN_THRESHOLD;

/// Coefficients for combining token overlap, string similarity and weight.
///
/// Base score = `token_weight * overlap + similarity_weight * similarity`.
/// Patterns additionally get `min(max_weight_boost, weight_boost_scale * ln(1 + weight))`
/// on top of a positive base score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub token_weight: f64,
    pub similarity_weight: f64,
    /// Share of the overlap score given to pattern coverage vs. precision.
    pub recall_weight: f64,
    /// Minimum per-token similarity for a fuzzy token match.
    pub token_match_threshold: f64,
    pub weight_boost_scale: f64,
    pub max_weight_boost: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            token_weight: 0.8,
            similarity_weight: 0.2,
            recall_weight: DEFAULT_RECALL_WEIGHT,
            token_match_threshold: DEFAULT_TOKEN_THRESHOLD,
            weight_boost_scale: 0.01,
            max_weight_boost: 0.05,
        }
    }
}

impl MatchConfig {
    /// Check every coefficient lies in [0, 1] and the blend weights sum to at most 1.
    pub fn validate(&self) -> Result<(), MatchError> {
        let fields = [
            ("token_weight", self.token_weight),
            ("similarity_weight", self.similarity_weight),
            ("recall_weight", self.recall_weight),
            ("token_match_threshold", self.token_match_threshold),
            ("weight_boost_scale", self.weight_boost_scale),
            ("max_weight_boost", self.max_weight_boost),
        ];
        for (field, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(MatchError::InvalidConfig { field, value });
            }
        }

        let blend = self.token_weight + self.similarity_weight;
        if blend > 1.0 + f64::EPSILON {
            return Err(MatchError::InvalidConfig {
                field: "token_weight + similarity_weight",
                value: blend,
            });
        }
        Ok(())
    }

    /// Blend overlap and whole-string similarity into a base score.
    pub fn base_score(&self, token_overlap: f64, string_similarity: f64) -> f64 {
        (self.token_weight * token_overlap + self.similarity_weight * string_similarity)
            .clamp(0.0, 1.0)
    }

    /// Ranking nudge for patterns confirmed `weight` times.
    pub fn weight_boost(&self, weight: u32) -> f64 {
        (self.weight_boost_scale * f64::from(weight).ln_1p()).min(self.max_weight_boost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(MatchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let config = MatchConfig {
            recall_weight: 1.2,
            ..MatchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(MatchError::InvalidConfig {
                field: "recall_weight",
                value: 1.2
            })
        );

        let config = MatchConfig {
            token_weight: 0.9,
            similarity_weight: 0.3,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = MatchConfig {
            max_weight_boost: f64::NAN,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_weight_boost_is_capped_and_monotonic() {
        let config = MatchConfig::default();
        assert_eq!(config.weight_boost(0), 0.0);
        assert!(config.weight_boost(1) > 0.0);
        assert!(config.weight_boost(10) > config.weight_boost(1));
        assert_eq!(config.weight_boost(u32::MAX), config.max_weight_boost);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{"token_weight": 0.7, "similarity_weight": 0.3}"#)
            .expect("valid config json");
        assert_eq!(config.token_weight, 0.7);
        assert_eq!(config.recall_weight, DEFAULT_RECALL_WEIGHT);
        assert_eq!(config.validate(), Ok(()));
    }
}
