//! String and token-set scoring primitives.

pub mod overlap;
pub mod similarity;

pub use overlap::{token_score, weighted_token_score};
pub use similarity::{similarity, token_similarity};
