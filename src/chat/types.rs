//! Chat message and reply types

use serde::{Deserialize, Serialize};

/// Author of a message in a session log or in the chat history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    /// Any other role the oracle writes into the log (e.g. `system`)
    Other(String),
}

impl Role {
    pub fn from_wire(role: &str) -> Self {
        match role {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Other(name) => name,
        }
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

/// A chat session allocated on-chain by `startChat`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatSession {
    pub id: u64,
    /// First log index this request has not yet observed
    pub start_index: usize,
}

impl ChatSession {
    pub fn new(id: u64) -> Self {
        Self { id, start_index: 0 }
    }
}

/// One typed part of a log entry's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPart {
    pub content_type: String,
    pub value: String,
}

impl ContentPart {
    pub fn is_text(&self) -> bool {
        self.content_type == "text"
    }

    #[cfg(test)]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            value: value.into(),
        }
    }
}

/// A message as stored in the contract's message history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLogEntry {
    pub role: String,
    pub content: Vec<ContentPart>,
}

impl RawLogEntry {
    #[cfg(test)]
    pub fn new(role: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: vec![ContentPart::text(value)],
        }
    }

    /// Collapse to a [`Message`] using the first content part only.
    /// An entry with no parts yields empty content.
    pub fn into_message(self) -> Message {
        let content = self
            .content
            .into_iter()
            .next()
            .map(|part| part.value)
            .unwrap_or_default();
        Message {
            role: Role::from_wire(&self.role),
            content,
        }
    }
}

/// Structured reply returned to HTTP callers. Every field is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub action: String,
    pub params: String,
    pub response: String,
    pub suggestions: String,
}

impl AssistantResponse {
    /// Reply for content that is not a JSON object: the raw text becomes the response
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            response: content.into(),
            ..Self::default()
        }
    }
}
