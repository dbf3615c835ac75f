//! Text normalization for invoice line items.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

/// Normalize raw invoice text.
///
/// Lowercases, drops every character that is not a letter, digit, whitespace
/// or `/` (kept for fraction quantities like "80/20"), collapses whitespace
/// runs and trims the ends. Idempotent.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '/')
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
