//! Text pipeline: normalization, shorthand expansion, tokenization.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial module structure

pub mod abbreviations;
pub mod normalize;
pub mod tokenizer;

pub use abbreviations::expand;
pub use normalize::normalize;
pub use tokenizer::{is_quantity, tokenize, TokenSet};
