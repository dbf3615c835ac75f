//! Output formatting for CLI commands.
//!
//! CHANGELOG:
//! - 10/19/2026 - Trimmed to json/compact/fields for match reports

use serde::Serialize;
use serde_json::{json, Value};

/// Output control settings from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct OutputControls {
    pub json: bool,
    pub compact: bool,
    pub fields: Option<String>,
}

impl OutputControls {
    /// Emit data according to output controls.
    pub fn emit<T: Serialize>(&self, data: &T) -> String {
        let value = serde_json::to_value(data).unwrap_or(json!(null));

        let filtered = match self.fields {
            Some(ref fields) => filter_fields(&value, fields),
            None => value,
        };

        if self.compact {
            serde_json::to_string(&filtered).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string_pretty(&filtered).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Print data to stdout according to output controls.
    pub fn print<T: Serialize>(&self, data: &T) {
        println!("{}", self.emit(data));
    }
}

/// Filter JSON value to only include specified fields.
fn filter_fields(value: &Value, fields: &str) -> Value {
    let field_list: Vec<&str> = fields.split(',').map(|s| s.trim()).collect();

    match value {
        Value::Array(arr) => Value::Array(arr.iter().map(|v| filter_fields(v, fields)).collect()),
        Value::Object(map) => {
            let mut filtered = serde_json::Map::new();
            for field in &field_list {
                if let Some(v) = map.get(*field) {
                    filtered.insert(field.to_string(), v.clone());
                }
            }
            Value::Object(filtered)
        }
        _ => value.clone(),
    }
}

/// Format error as JSON.
pub fn format_error(error: &str) -> String {
    serde_json::to_string(&json!({
        "error": error,
        "success": false
    }))
    .unwrap_or_else(|_| format!(r#"{{"error":"{}"}}"#, error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_filter_on_array() {
        let output = OutputControls {
            json: true,
            compact: true,
            fields: Some("score, kind".to_string()),
        };
        let data = json!([
            {"kind": "pattern", "score": 0.9, "breakdown": {}},
            {"kind": "ingredient", "score": 0.4, "subject": {}}
        ]);
        assert_eq!(
            output.emit(&data),
            r#"[{"kind":"pattern","score":0.9},{"kind":"ingredient","score":0.4}]"#
        );
    }

    #[test]
    fn test_scalars_pass_through() {
        let output = OutputControls {
            compact: true,
            fields: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(output.emit(&0.5), "0.5");
    }

    #[test]
    fn test_format_error() {
        assert_eq!(format_error("boom"), r#"{"error":"boom","success":false}"#);
    }
}
