use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{LoadError, Result};

/// Parse a document whose top level must be a JSON array
pub fn parse_array(category: &'static str, text: &str) -> Result<Vec<Value>> {
    let json: Value = serde_json::from_str(text)
        .map_err(|e| LoadError::malformed(category, None, format!("invalid JSON: {}", e)))?;

    match json {
        Value::Array(items) => Ok(items),
        other => Err(LoadError::malformed(
            category,
            None,
            format!("expected a top-level array, found {}", json_kind(&other)),
        )),
    }
}

/// Decode every element on its own so a failure names the offending entity.
///
/// `group` prefixes the label for entries nested under a named category.
pub fn decode_entries<T: DeserializeOwned>(
    category: &'static str,
    group: Option<&str>,
    values: Vec<Value>,
) -> Result<Vec<T>> {
    values
        .into_iter()
        .enumerate()
        .map(|(idx, value)| {
            let label = entity_label(group, &value, idx);
            serde_json::from_value(value)
                .map_err(|e| LoadError::malformed(category, Some(label), e.to_string()))
        })
        .collect()
}

/// Parse a top-level array document into typed records
pub fn decode_records<T: DeserializeOwned>(category: &'static str, text: &str) -> Result<Vec<T>> {
    decode_entries(category, None, parse_array(category, text)?)
}

fn entity_label(group: Option<&str>, value: &Value, idx: usize) -> String {
    let name = value
        .get("name")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", idx));

    match group {
        Some(group) => format!("{} / {}", group, name),
        None => name,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
