//! Matching commands: patterns, ingredients, suggest, learn.
//!
//! CHANGELOG:
//! - 10/19/2026 - Added learn (prints a new pattern, never writes the catalog)
//! - 10/19/2026 - Initial implementation

use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::matching::{LearnedPattern, MatchConfig, MatchResult, Matcher, ScoreBreakdown, Suggestion};
use crate::output::OutputControls;
use crate::text::tokenize;

/// Options shared by every matching command.
#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    /// Catalog JSON (defaults to $INGREDIENT_MATCHER_CATALOG or the config dir)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Matcher coefficients JSON (missing fields use defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Drop candidates scoring below this (0.0 - 1.0)
    #[arg(short, long, default_value_t = 0.5)]
    pub min_confidence: f64,

    /// Max results to show
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,
}

/// Build a matcher from an optional config file.
pub fn load_matcher(path: Option<&Path>) -> Result<Matcher> {
    let Some(path) = path else {
        return Ok(Matcher::new());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: MatchConfig =
        serde_json::from_str(&content).with_context(|| "Failed to parse matcher config JSON")?;

    Ok(Matcher::with_config(config)?)
}

fn describe(breakdown: &ScoreBreakdown) -> String {
    let mut line = format!(
        "overlap {:.2}, similarity {:.2}",
        breakdown.token_overlap, breakdown.string_similarity
    );
    if breakdown.weight_boost > 0.0 {
        line.push_str(&format!(", boost {:.3}", breakdown.weight_boost));
    }
    if let Some(ref alias) = breakdown.alias {
        line.push_str(&format!(", via alias {:?}", alias));
    }
    line
}

fn print_none(text: &str) {
    println!("No match for {:?}.", text);
}

/// Rank learned patterns for a description.
pub fn patterns(text: &str, args: &MatchArgs, output: &OutputControls) -> Result<()> {
    let matcher = load_matcher(args.config.as_deref())?;
    let catalog = Catalog::load_or_default(args.catalog.as_deref())?;

    let mut matches = matcher.find_pattern_matches(text, &catalog.patterns, args.min_confidence)?;
    matches.truncate(args.limit);

    if output.json {
        output.print(&matches);
        return Ok(());
    }
    if matches.is_empty() {
        print_none(text);
        return Ok(());
    }
    for MatchResult { subject, score, breakdown } in &matches {
        println!(
            "{:.3}  {} [{}] weight {} ({})",
            score,
            subject.ingredient_name,
            subject.tokens,
            subject.weight,
            describe(breakdown)
        );
    }
    Ok(())
}

/// Rank catalog ingredients for a description.
pub fn ingredients(text: &str, args: &MatchArgs, output: &OutputControls) -> Result<()> {
    let matcher = load_matcher(args.config.as_deref())?;
    let catalog = Catalog::load_or_default(args.catalog.as_deref())?;

    let mut matches =
        matcher.find_ingredient_matches(text, &catalog.ingredients, args.min_confidence)?;
    matches.truncate(args.limit);

    if output.json {
        output.print(&matches);
        return Ok(());
    }
    if matches.is_empty() {
        print_none(text);
        return Ok(());
    }
    for MatchResult { subject, score, breakdown } in &matches {
        let sku = if subject.sku.is_empty() {
            String::new()
        } else {
            format!(" {}", subject.sku)
        };
        println!("{:.3}  {}{} ({})", score, subject.name, sku, describe(breakdown));
    }
    Ok(())
}

/// Merged suggestions from patterns and catalog.
pub fn suggest(text: &str, args: &MatchArgs, output: &OutputControls) -> Result<()> {
    let matcher = load_matcher(args.config.as_deref())?;
    let catalog = Catalog::load_or_default(args.catalog.as_deref())?;

    let mut suggestions = matcher.suggest(
        text,
        &catalog.patterns,
        &catalog.ingredients,
        args.min_confidence,
    )?;
    suggestions.truncate(args.limit);

    if output.json {
        output.print(&suggestions);
        return Ok(());
    }
    if suggestions.is_empty() {
        print_none(text);
        return Ok(());
    }
    for suggestion in &suggestions {
        let (kind, breakdown) = match suggestion {
            Suggestion::Pattern(m) => ("pattern", &m.breakdown),
            Suggestion::Ingredient(m) => ("catalog", &m.breakdown),
        };
        println!(
            "{:.3}  {:<8} {} ({})",
            suggestion.score(),
            kind,
            suggestion.ingredient_name(),
            describe(breakdown)
        );
    }
    Ok(())
}

/// Print the pattern that confirming `text` -> `ingredient` would record.
pub fn learn(text: &str, ingredient: &str, catalog: Option<&Path>, output: &OutputControls) -> Result<()> {
    let catalog = Catalog::load_or_default(catalog)?;
    let info = catalog
        .find_ingredient(ingredient)
        .ok_or_else(|| anyhow!("Ingredient not found in catalog: {}", ingredient))?;

    let now = chrono::Utc::now();
    let tokens = tokenize(text);
    let pattern = match catalog
        .patterns
        .iter()
        .find(|p| p.ingredient_id == info.id && p.tokens == tokens)
    {
        Some(existing) => existing.reinforced(now),
        None => LearnedPattern::learn(text, info, now),
    };

    if output.json {
        output.print(&pattern);
    } else {
        println!(
            "{} [{}] weight {} learned_at {}",
            pattern.ingredient_name,
            pattern.tokens,
            pattern.weight,
            pattern.learned_at.to_rfc3339()
        );
    }
    Ok(())
}
