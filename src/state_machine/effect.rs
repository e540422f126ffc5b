//! Effects produced by state transitions

use crate::chat::Message;
use std::time::Duration;

/// Effects to be executed after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append to the chat history
    AppendHistory { message: Message },

    /// Send the current history transcript as a new chat session
    SubmitTranscript,

    /// Read the session log from `start_index`
    ReadMessages { session_id: u64, start_index: usize },

    /// Wait, then fire `PollTimerFired`
    ScheduleRetry { delay: Duration },
}
