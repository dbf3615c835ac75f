//! ingredient-matcher - diagnostic CLI for the invoice matching engine
//!
//! Shows each pipeline stage and the score breakdown for a description so
//! thresholds and coefficients can be tuned against real invoice text.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial CLI

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use ingredient_matcher::commands::{self, matching::MatchArgs};
use ingredient_matcher::output::{format_error, OutputControls};

/// Match invoice line items against learned patterns and an ingredient catalog.
#[derive(Parser, Debug)]
#[command(name = "ingredient-matcher")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    /// Comma-separated field allowlist
    #[arg(long, global = true)]
    fields: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    // =========================================================================
    // PIPELINE STAGES
    // =========================================================================
    /// Print the normalized form of a description
    Normalize {
        text: String,
    },

    /// Print a description after shorthand expansion
    Expand {
        text: String,
    },

    /// Print the significant tokens of a description
    Tokenize {
        text: String,
    },

    /// Edit-distance similarity of two strings
    Similarity {
        a: String,
        b: String,
    },

    /// Token overlap score of a description against a pattern text
    TokenScore {
        description: String,
        pattern: String,
    },

    // =========================================================================
    // MATCHING
    // =========================================================================
    /// Rank learned patterns for a description
    Patterns {
        text: String,

        #[command(flatten)]
        args: MatchArgs,
    },

    /// Rank catalog ingredients for a description
    Ingredients {
        text: String,

        #[command(flatten)]
        args: MatchArgs,
    },

    /// Merged suggestions from patterns and catalog
    Suggest {
        text: String,

        #[command(flatten)]
        args: MatchArgs,
    },

    /// Show the pattern a confirmed match would record (does not write)
    Learn {
        text: String,

        /// Ingredient id or name from the catalog
        #[arg(long)]
        ingredient: String,

        /// Catalog JSON
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = OutputControls {
        json: cli.json || cli.compact || cli.fields.is_some(),
        compact: cli.compact,
        fields: cli.fields.clone(),
    };

    let result = match cli.command {
        Command::Normalize { text } => commands::text::normalize_cmd(&text, &output),
        Command::Expand { text } => commands::text::expand_cmd(&text, &output),
        Command::Tokenize { text } => commands::text::tokenize_cmd(&text, &output),
        Command::Similarity { a, b } => commands::text::similarity_cmd(&a, &b, &output),
        Command::TokenScore { description, pattern } => {
            commands::text::token_score_cmd(&description, &pattern, &output)
        }

        Command::Patterns { text, args } => commands::matching::patterns(&text, &args, &output),
        Command::Ingredients { text, args } => {
            commands::matching::ingredients(&text, &args, &output)
        }
        Command::Suggest { text, args } => commands::matching::suggest(&text, &args, &output),
        Command::Learn { text, ingredient, catalog } => {
            commands::matching::learn(&text, &ingredient, catalog.as_deref(), &output)
        }
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            if output.json {
                eprintln!("{}", format_error(&format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(1)
        }
    }
}
