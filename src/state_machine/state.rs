//! Chat request states

use crate::chat::{AssistantResponse, ChatError, ChatSession};
use crate::config::ServerConfig;
use std::time::Duration;

/// Lifecycle of a single chat request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChatState {
    /// No message received yet
    #[default]
    Idle,

    /// User message recorded, chat transaction in flight
    AwaitingSubmission,

    /// Session created, polling its log for the oracle's reply
    AwaitingReply {
        session: ChatSession,
        /// Next unobserved log index
        cursor: usize,
        /// Completed reads that found no reply
        polls: u32,
    },

    /// Reply received
    Done {
        session: ChatSession,
        cursor: usize,
        response: AssistantResponse,
    },

    /// Request failed; absorbing
    Failed { error: ChatError },
}

impl ChatState {
    pub fn name(&self) -> &'static str {
        match self {
            ChatState::Idle => "idle",
            ChatState::AwaitingSubmission => "awaiting_submission",
            ChatState::AwaitingReply { .. } => "awaiting_reply",
            ChatState::Done { .. } => "done",
            ChatState::Failed { .. } => "failed",
        }
    }
}

/// Fixed parameters of a chat request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatContext {
    pub poll_interval: Duration,
    /// Give up after this many empty reads; `None` waits forever
    pub max_polls: Option<u32>,
}

impl ChatContext {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            max_polls: None,
        }
    }

    #[allow(dead_code)] // Configured through ServerConfig in production
    pub fn with_max_polls(mut self, max_polls: u32) -> Self {
        self.max_polls = Some(max_polls);
        self
    }
}

impl From<&ServerConfig> for ChatContext {
    fn from(config: &ServerConfig) -> Self {
        Self {
            poll_interval: config.poll_interval,
            max_polls: config.max_polls,
        }
    }
}
