//! Rendering command results for the terminal.

use serde::Serialize;
use serde_json::Value;

use crate::config::OutputFormat;
use crate::Result;

/// Renders `value` in the requested format.
///
/// Plain output prints scalars bare, flat arrays as space-separated values,
/// nested arrays one row per line and objects as `key: value` lines.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(value)?),
        OutputFormat::Plain => Ok(plain(&serde_json::to_value(value)?)),
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::Array(items) if items.iter().any(Value::is_array) => items
            .iter()
            .map(plain)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(" "),
        Value::Object(fields) => fields
            .iter()
            .map(|(k, v)| format!("{}: {}", k, plain(v)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => scalar(other),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
