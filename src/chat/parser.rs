//! Decoding of oracle replies
//!
//! Oracle output is untrusted: it may be a JSON object with the expected
//! fields, a differently shaped JSON value, or plain prose. Decoding never
//! fails. Content that does not decode, or decodes to `null`, becomes a
//! response-only reply. Any other JSON value has no fields to read, so
//! every field is empty.

use super::AssistantResponse;
use serde_json::{Map, Value};

const SUGGESTION_SEPARATOR: &str = ", ";

/// Decode raw assistant content into an [`AssistantResponse`]
pub fn parse_assistant_response(content: &str) -> AssistantResponse {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(fields)) => AssistantResponse {
            action: text_field(&fields, "action"),
            params: text_field(&fields, "params"),
            response: text_field(&fields, "response"),
            suggestions: suggestions_field(&fields),
        },
        Ok(Value::Null) | Err(_) => AssistantResponse::plain(content),
        Ok(_) => AssistantResponse::default(),
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn suggestions_field(fields: &Map<String, Value>) -> String {
    let Some(Value::Array(items)) = fields.get("suggestions") else {
        return String::new();
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(SUGGESTION_SEPARATOR)
}
