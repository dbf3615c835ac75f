//! Supplier shorthand expansion.
//!
//! Invoice lines are full of vendor abbreviations ("CHKN BRST BNLS"). The
//! table below maps each known shorthand to its canonical phrase. Lookups are
//! case-insensitive and only ever apply to whole alphabetic words, so
//! quantity tokens like "24ct" or "80/20" pass through untouched.
//!
//! CHANGELOG:
//! - 10/19/2026 - Slash compounds expand per part
//! - 10/19/2026 - Initial table and regex-based expansion

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Shorthand -> canonical phrase. Keys are lowercase.
const ABBREVIATIONS: &[(&str, &str)] = &[
    // Proteins
    ("chkn", "chicken"),
    ("chk", "chicken"),
    ("ckn", "chicken"),
    ("brst", "breast"),
    ("thgh", "thigh"),
    ("bf", "beef"),
    ("grd", "ground"),
    ("prk", "pork"),
    ("tky", "turkey"),
    ("slmn", "salmon"),
    ("shrmp", "shrimp"),
    ("bnls", "boneless"),
    ("sknls", "skinless"),
    // Produce
    ("tmt", "tomato"),
    ("onin", "onion"),
    ("lttc", "lettuce"),
    ("grn", "green"),
    ("ylw", "yellow"),
    ("rd", "red"),
    // Dairy
    ("mlk", "milk"),
    ("bttr", "butter"),
    ("chs", "cheese"),
    ("mozz", "mozzarella"),
    ("parm", "parmesan"),
    ("crm", "cream"),
    ("hvy", "heavy"),
    // Pantry
    ("evoo", "extra virgin olive oil"),
    ("oo", "olive oil"),
    ("pwdr", "powder"),
    ("sce", "sauce"),
    ("vngr", "vinegar"),
    ("flr", "flour"),
    ("sgr", "sugar"),
    // Descriptors
    ("org", "organic"),
    ("lg", "large"),
    ("lrg", "large"),
    ("med", "medium"),
    ("sm", "small"),
    ("xl", "extra large"),
    ("whl", "whole"),
    ("frz", "frozen"),
    ("frzn", "frozen"),
    ("frsh", "fresh"),
    ("slcd", "sliced"),
    ("shrd", "shredded"),
    ("dcd", "diced"),
    ("chpd", "chopped"),
    ("blk", "black"),
    ("wht", "white"),
    ("brn", "brown"),
    ("veg", "vegetable"),
    // Packaging
    ("pkg", "package"),
    ("doz", "dozen"),
    ("dz", "dozen"),
];

static ABBREVIATION_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ABBREVIATIONS.iter().copied().collect());

/// An alphabetic word, or a slash compound of them ("lg/xl").
static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z]+(?:/[A-Za-z]+)*\b").expect("valid word regex")
});

/// Look up the canonical phrase for a single shorthand word.
pub fn lookup(word: &str) -> Option<&'static str> {
    ABBREVIATION_MAP.get(word.to_lowercase().as_str()).copied()
}

/// Expand known shorthand words in `text`.
///
/// Each word is looked up once; expansions are never re-scanned, so
/// "EVOO" becomes "extra virgin olive oil" and stops there. Unknown words
/// keep their original spelling and case.
///
/// A slash compound of words lists alternatives ("LG/XL"). When any part is
/// known shorthand the parts are expanded one by one and split apart
/// ("large extra large"); otherwise the compound is left as written.
pub fn expand(text: &str) -> String {
    WORD.replace_all(text, |caps: &Captures| -> Cow<'static, str> {
        let word = &caps[0];
        if !word.contains('/') {
            return match lookup(word) {
                Some(expansion) => Cow::Borrowed(expansion),
                None => Cow::Owned(word.to_string()),
            };
        }

        let parts: Vec<&str> = word.split('/').collect();
        if parts.iter().all(|part| lookup(part).is_none()) {
            return Cow::Owned(word.to_string());
        }
        let expanded: Vec<&str> = parts
            .iter()
            .map(|&part| lookup(part).unwrap_or(part))
            .collect();
        Cow::Owned(expanded.join(" "))
    })
    .into_owned()
}
