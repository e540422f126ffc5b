//! API request and response types

use crate::chat::Message;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /start-chat`
#[derive(Debug, Default, Deserialize)]
pub struct StartChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

impl StartChatRequest {
    /// The message as transcript text, or `None` when it is absent or
    /// falsy (`null`, `false`, `0` or `""`). Strings are taken verbatim and
    /// any other value is rendered as its JSON text.
    pub fn into_text(self) -> Option<String> {
        match self.message? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}

/// One entry of the chat history
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub role: String,
    pub content: String,
}

impl From<&Message> for HistoryEntry {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
        }
    }
}

/// Response for `GET /history`
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<HistoryEntry>,
}
