//! Chain client error types

use thiserror::Error;

/// Error talking to the chat contract, with classification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ChainError {
    pub kind: ChainErrorKind,
    pub message: String,
}

impl ChainError {
    pub fn new(kind: ChainErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ChainErrorKind::Transport, message)
    }

    pub fn contract(message: impl Into<String>) -> Self {
        Self::new(ChainErrorKind::Contract, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ChainErrorKind::InvalidInput, message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainErrorKind {
    /// RPC endpoint unreachable, timed out, or returned a transport error
    Transport,
    /// Call reverted, or the returned data could not be decoded
    Contract,
    /// Rejected before anything was sent
    InvalidInput,
}

impl std::fmt::Display for ChainErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Transport => "transport",
            Self::Contract => "contract",
            Self::InvalidInput => "invalid input",
        };
        f.write_str(name)
    }
}
