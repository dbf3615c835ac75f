//! Text pipeline commands: normalize, expand, tokenize, similarity, token-score.
//!
//! These print each stage of the pipeline so a surprising score can be traced
//! back to what the tokenizer actually saw.

use anyhow::Result;
use serde_json::json;

use crate::output::OutputControls;
use crate::scoring::{similarity, token_score};
use crate::text::{expand, normalize, tokenize};

pub fn normalize_cmd(text: &str, output: &OutputControls) -> Result<()> {
    let normalized = normalize(text);
    if output.json {
        output.print(&json!({ "input": text, "normalized": normalized }));
    } else {
        println!("{}", normalized);
    }
    Ok(())
}

pub fn expand_cmd(text: &str, output: &OutputControls) -> Result<()> {
    let expanded = expand(&normalize(text));
    if output.json {
        output.print(&json!({ "input": text, "expanded": expanded }));
    } else {
        println!("{}", expanded);
    }
    Ok(())
}

pub fn tokenize_cmd(text: &str, output: &OutputControls) -> Result<()> {
    let tokens = tokenize(text);
    if output.json {
        output.print(&json!({ "input": text, "tokens": tokens }));
    } else if tokens.is_empty() {
        println!("(no significant tokens)");
    } else {
        println!("{}", tokens);
    }
    Ok(())
}

pub fn similarity_cmd(a: &str, b: &str, output: &OutputControls) -> Result<()> {
    let score = similarity(a, b);
    if output.json {
        output.print(&json!({ "a": a, "b": b, "similarity": score }));
    } else {
        println!("{:.4}", score);
    }
    Ok(())
}

pub fn token_score_cmd(description: &str, pattern: &str, output: &OutputControls) -> Result<()> {
    let description_tokens = tokenize(description);
    let pattern_tokens = tokenize(pattern);
    let score = token_score(&description_tokens, &pattern_tokens);

    if output.json {
        output.print(&json!({
            "description_tokens": description_tokens,
            "pattern_tokens": pattern_tokens,
            "token_score": score,
        }));
    } else {
        println!("description: {}", description_tokens);
        println!("pattern:     {}", pattern_tokens);
        println!("score:       {:.4}", score);
    }
    Ok(())
}
