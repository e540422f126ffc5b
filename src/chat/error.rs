//! Chat request error types

use crate::chain::ChainError;
use crate::config::ConfigError;
use thiserror::Error;

/// Everything that can end a chat request without a reply
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),
    /// The chat transaction was mined but emitted no `ChatCreated` event
    #[error("Failed to get chat ID")]
    SessionIdNotFound,
    #[error("chat submission failed: {0}")]
    Submission(ChainError),
    #[error("message log read failed: {0}")]
    LogRead(ChainError),
    #[error("no assistant reply after {0} polls")]
    ReplyTimeout(u32),
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}
