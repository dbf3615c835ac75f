//! Tokenization of invoice descriptions into significant token sets.
//!
//! CHANGELOG:
//! - 10/19/2026 - TokenSet construction and deserialization go through tokenize
//! - 10/19/2026 - Initial implementation

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use super::abbreviations::expand;
use super::normalize::normalize;

/// Words that carry no matching signal. Kept sorted for binary search.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "approx", "at", "by", "each", "for", "from", "in", "of", "on", "or",
    "per", "the", "to", "w", "with",
];

/// Pure digits, digits with a unit suffix ("24ct", "10lb"), or a fraction ("80/20").
static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+[a-z]*|\d+/\d+)$").expect("valid quantity regex")
});

/// Unordered set of unique, normalized tokens.
///
/// Backed by a `BTreeSet` so iteration (and anything derived from it, like
/// the sorted canonical string) is deterministic. Every way of building one
/// (collecting strings, `insert`, deserializing a JSON array) runs each input
/// through [`tokenize`], so members are always lowercase, non-empty, expanded
/// and free of stop words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TokenSet(BTreeSet<String>);

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Tokenize `text` and add the result. Returns true if anything was new.
    pub fn insert(&mut self, text: &str) -> bool {
        let before = self.0.len();
        self.0.extend(tokenize(text).0);
        self.0.len() > before
    }

    /// Remove a token given in its normalized form.
    pub fn remove(&mut self, token: &str) -> bool {
        self.0.remove(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Tokens joined by single spaces in sorted order.
    pub fn canonical(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }
}

impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl<S: AsRef<str>> FromIterator<S> for TokenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for text in iter {
            set.insert(text.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for TokenSet {
    fn from(tokens: Vec<String>) -> Self {
        tokens.into_iter().collect()
    }
}

impl From<TokenSet> for Vec<String> {
    fn from(set: TokenSet) -> Self {
        set.0.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Check whether a normalized token looks like a quantity.
pub fn is_quantity(token: &str) -> bool {
    QUANTITY.is_match(token)
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}

/// Tokenize raw invoice text.
///
/// normalize -> expand -> split on whitespace -> drop stop words. Slashes
/// left dangling at token edges are trimmed and tokens that were nothing but
/// punctuation disappear. Quantity tokens are always kept.
pub fn tokenize(text: &str) -> TokenSet {
    let expanded = expand(&normalize(text));

    let tokens = expanded
        .split_whitespace()
        .map(|word| word.trim_matches('/'))
        .filter(|word| !word.is_empty())
        .filter(|word| is_quantity(word) || !is_stop_word(word))
        .map(str::to_string)
        .collect();
    TokenSet(tokens)
}
