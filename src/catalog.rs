//! Catalog file loading for the CLI.
//!
//! The engine never reads files itself; this is how the diagnostic binary
//! gets a pattern collection and ingredient catalog to score against.
//!
//! CHANGELOG:
//! - 10/19/2026 - Pick wrapped vs. flat format up front so field errors surface
//! - 10/19/2026 - Name/id lookup for the learn command
//! - 10/19/2026 - Initial implementation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::matching::{IngredientInfo, LearnedPattern};
use crate::text::normalize;

/// Env var overriding the default catalog location.
pub const CATALOG_PATH_ENV: &str = "INGREDIENT_MATCHER_CATALOG";

/// Default catalog.json path.
///
/// Tries, in order:
/// 1. INGREDIENT_MATCHER_CATALOG env var
/// 2. <config dir>/ingredient-matcher/catalog.json
/// 3. ./catalog.json
pub fn default_catalog_path() -> PathBuf {
    if let Ok(path) = std::env::var(CATALOG_PATH_ENV) {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .map(|dir| dir.join("ingredient-matcher").join("catalog.json"))
        .unwrap_or_else(|| PathBuf::from("catalog.json"))
}

/// Ingredients plus learned patterns, as stored in catalog.json.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub ingredients: Vec<IngredientInfo>,
    #[serde(default)]
    pub patterns: Vec<LearnedPattern>,
}

impl Catalog {
    /// Parse catalog JSON.
    ///
    /// Supports both formats:
    /// - `{"ingredients": [...], "patterns": [...]}`
    /// - `[...]` (ingredients only)
    ///
    /// The shape is picked from the first non-whitespace character, so a
    /// malformed field in a wrapped catalog reports that field's error.
    pub fn from_json(content: &str) -> Result<Self> {
        if content.trim_start().starts_with('{') {
            return serde_json::from_str::<Catalog>(content)
                .with_context(|| "Failed to parse catalog JSON");
        }

        let ingredients: Vec<IngredientInfo> = serde_json::from_str(content)
            .with_context(|| "Failed to parse catalog ingredient array")?;

        Ok(Self {
            ingredients,
            patterns: Vec::new(),
        })
    }

    /// Load a catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read catalog file: {:?}", path.as_ref()))?;

        let catalog = Self::from_json(&content)?;
        debug!(
            path = ?path.as_ref(),
            ingredients = catalog.ingredients.len(),
            patterns = catalog.patterns.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Load from an explicit path or the default location.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load(default_catalog_path()),
        }
    }

    /// Find an ingredient by id or by name (normalized, exact).
    pub fn find_ingredient(&self, id_or_name: &str) -> Option<&IngredientInfo> {
        if let Ok(id) = id_or_name.parse::<uuid::Uuid>() {
            return self.ingredients.iter().find(|i| i.id == id);
        }

        let wanted = normalize(id_or_name);
        self.ingredients.iter().find(|i| normalize(&i.name) == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRAPPED: &str = r#"{
        "ingredients": [
            {"id": "0b7f6d1e-3c2a-4f5b-8e9d-112233445566", "name": "Extra Virgin Olive Oil",
             "sku": "OIL-EVOO-1L", "category": "Oils", "aliases": ["EVOO", "Olive Oil"]},
            {"id": "1c8a7e2f-4d3b-4a6c-9f0e-223344556677", "name": "Chicken Breast"}
        ],
        "patterns": [
            {"tokens": ["breast", "chicken"], "ingredient_id": "1c8a7e2f-4d3b-4a6c-9f0e-223344556677",
             "ingredient_name": "Chicken Breast", "weight": 4, "learned_at": "2026-05-01T10:00:00Z"}
        ]
    }"#;

    #[test]
    fn test_wrapped_format() {
        let catalog = Catalog::from_json(WRAPPED).unwrap();
        assert_eq!(catalog.ingredients.len(), 2);
        assert_eq!(catalog.ingredients[0].aliases, vec!["EVOO", "Olive Oil"]);
        assert_eq!(catalog.patterns.len(), 1);
        assert_eq!(catalog.patterns[0].weight, 4);
        assert!(catalog.patterns[0].tokens.contains("chicken"));
    }

    #[test]
    fn test_flat_array_format() {
        let json = r#"[{"id": "0b7f6d1e-3c2a-4f5b-8e9d-112233445566", "name": "Heavy Cream"}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.ingredients.len(), 1);
        assert!(catalog.patterns.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        assert!(Catalog::from_json("{not json").is_err());
    }

    #[test]
    fn test_find_ingredient() {
        let catalog = Catalog::from_json(WRAPPED).unwrap();
        assert_eq!(
            catalog.find_ingredient("chicken  BREAST").map(|i| i.name.as_str()),
            Some("Chicken Breast")
        );
        assert_eq!(
            catalog
                .find_ingredient("0b7f6d1e-3c2a-4f5b-8e9d-112233445566")
                .map(|i| i.sku.as_str()),
            Some("OIL-EVOO-1L")
        );
        assert!(catalog.find_ingredient("Saffron").is_none());
    }

    #[test]
    fn test_wrapped_format_reports_field_error() {
        let json = r#"{
            "ingredients": [],
            "patterns": [
                {"tokens": ["beef"], "ingredient_id": "1c8a7e2f-4d3b-4a6c-9f0e-223344556677",
                 "ingredient_name": "Ground Beef", "learned_at": "last tuesday"}
            ]
        }"#;
        let err = Catalog::from_json(json).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Failed to parse catalog JSON"), "error was {}", chain);
        assert!(!chain.contains("expected a sequence"), "error was {}", chain);
    }

    #[test]
    fn test_bundled_sample_catalog() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("catalog.json");
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.ingredients.len(), 5);
        assert_eq!(catalog.patterns.len(), 3);

        let suggestions = crate::matching::Matcher::new()
            .suggest("CHKN BRST BNLS SKNLS 40LB", &catalog.patterns, &catalog.ingredients, 0.5)
            .unwrap();
        assert_eq!(suggestions[0].ingredient_name(), "Chicken Breast");
        assert!(matches!(suggestions[0], crate::matching::Suggestion::Pattern(_)));

        let matches = crate::matching::Matcher::new()
            .find_ingredient_matches("EVOO 1 Liter", &catalog.ingredients, 0.3)
            .unwrap();
        assert_eq!(matches[0].subject.sku, "OIL-EVOO-1L");
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::load("/nonexistent/catalog.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }
}
