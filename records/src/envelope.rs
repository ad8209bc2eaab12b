//! List-response normalization.
//!
//! The backend is inconsistent about list shapes: some endpoints answer with a
//! bare array, others wrap it as `{ "items": [...], "total": n }` or
//! `{ "data": [...] }`. Every caller goes through [`decode_list`] /
//! [`decode_page`] so that only genuinely unexpected shapes become errors.
//! Error bodies are reduced to one message by [`error_detail`].

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::RecordsError;

/// The three list shapes accepted from the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Items {
        items: Vec<T>,
        #[serde(default)]
        total: Option<u64>,
    },
    Data {
        data: Vec<T>,
    },
}

impl<T> ListEnvelope<T> {
    /// Server-reported total, falling back to the number of items returned.
    #[must_use]
    pub fn total(&self) -> u64 {
        match self {
            Self::Items { total: Some(total), .. } => *total,
            Self::Items { items, .. } | Self::Bare(items) | Self::Data { data: items } => items.len() as u64,
        }
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Items { items, .. } | Self::Data { data: items } => items,
        }
    }
}

/// Decode any accepted list shape into its items.
///
/// # Errors
///
/// Returns [`RecordsError::UnexpectedShape`] when `value` matches none of the
/// accepted envelopes.
pub fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, RecordsError> {
    decode_envelope(value).map(ListEnvelope::into_items)
}

/// Decode a list together with its total count.
///
/// # Errors
///
/// Returns [`RecordsError::UnexpectedShape`] for unrecognised shapes.
pub fn decode_page<T: DeserializeOwned>(value: Value) -> Result<(Vec<T>, u64), RecordsError> {
    let envelope = decode_envelope(value)?;
    let total = envelope.total();
    Ok((envelope.into_items(), total))
}

fn decode_envelope<T: DeserializeOwned>(value: Value) -> Result<ListEnvelope<T>, RecordsError> {
    let kind = shape_name(&value);
    serde_json::from_value::<ListEnvelope<T>>(value).map_err(|_| RecordsError::UnexpectedShape(kind.to_owned()))
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array of unexpected records",
        Value::Object(map) if map.contains_key("items") || map.contains_key("data") => "object with unexpected records",
        Value::Object(_) => "object without items",
    }
}

/// Extract a message from an error response body.
///
/// Accepts `{"detail": "..."}`, validation lists `{"detail": [{"msg": ...}]}`
/// and plain text; falls back to the status line.
#[must_use]
pub fn error_detail(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        match value.get("detail") {
            Some(Value::String(detail)) if !detail.is_empty() => return detail.clone(),
            Some(Value::Array(entries)) => {
                let messages: Vec<&str> = entries
                    .iter()
                    .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                    .collect();
                if !messages.is_empty() {
                    return messages.join("; ");
                }
            }
            _ => {}
        }
    } else if !trimmed.is_empty() && !trimmed.starts_with('<') {
        return trimmed.to_owned();
    }
    format!("Request failed with status code {status}")
}
