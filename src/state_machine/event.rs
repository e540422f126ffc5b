//! Events that drive a chat request

use crate::chain::ChainError;
use crate::chat::{ChatError, Message};

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // Caller events
    UserMessage { text: String },

    // Submission outcomes
    SessionCreated { session_id: u64 },
    SubmissionFailed { error: ChatError },

    // Log polling outcomes
    MessagesRead { messages: Vec<Message> },
    ReadFailed { error: ChainError },
    PollTimerFired,
}
