//! Trait abstractions for runtime I/O
//!
//! These traits let the coordinator run against mock contracts and
//! alternative history stores in tests.

use crate::chain::{ChainClient, ChainError};
use crate::chat::{ChatError, Message, RawLogEntry};
use crate::config::{ChainConfig, ConfigError};
use async_trait::async_trait;
use std::sync::Arc;

/// Opens chat sessions on-chain
#[async_trait]
pub trait SessionSubmitter: Send + Sync {
    /// Submit `transcript` as one transaction and return the new session id.
    /// Not idempotent: every call creates a session.
    async fn create_session(&self, transcript: &str) -> Result<u64, ChatError>;
}

/// Read access to a session's append-only message log
#[async_trait]
pub trait MessageLogReader: Send + Sync {
    /// All entries at or after `start_index`, in log order
    async fn read_messages(
        &self,
        session_id: u64,
        start_index: usize,
    ) -> Result<Vec<RawLogEntry>, ChainError>;
}

/// Combined contract trait for convenience
pub trait ChatContract: SessionSubmitter + MessageLogReader {}
impl<T: SessionSubmitter + MessageLogReader + ?Sized> ChatContract for T {}

/// Ordered record of exchanged messages
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn append(&self, message: Message);

    /// Message contents joined with newlines, oldest first
    async fn transcript(&self) -> String;

    async fn messages(&self) -> Vec<Message>;
}

/// Produces a contract client for each request
pub trait ContractConnector: Send + Sync {
    fn connect(&self) -> Result<Arc<dyn ChatContract>, ConfigError>;
}

// ============================================================================
// Arc implementations for trait objects
// ============================================================================

#[async_trait]
impl<T: SessionSubmitter + ?Sized> SessionSubmitter for Arc<T> {
    async fn create_session(&self, transcript: &str) -> Result<u64, ChatError> {
        (**self).create_session(transcript).await
    }
}

#[async_trait]
impl<T: MessageLogReader + ?Sized> MessageLogReader for Arc<T> {
    async fn read_messages(
        &self,
        session_id: u64,
        start_index: usize,
    ) -> Result<Vec<RawLogEntry>, ChainError> {
        (**self).read_messages(session_id, start_index).await
    }
}

#[async_trait]
impl<T: HistoryStore + ?Sized> HistoryStore for Arc<T> {
    async fn append(&self, message: Message) {
        (**self).append(message).await;
    }

    async fn transcript(&self) -> String {
        (**self).transcript().await
    }

    async fn messages(&self) -> Vec<Message> {
        (**self).messages().await
    }
}

// ============================================================================
// Production Adapters
// ============================================================================

/// Resolves chain settings from the environment on every request
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvConnector;

impl ContractConnector for EnvConnector {
    fn connect(&self) -> Result<Arc<dyn ChatContract>, ConfigError> {
        let config = ChainConfig::from_env()?;
        tracing::debug!(
            rpc_url = %config.rpc_url,
            contract = %config.contract_address,
            "Connecting to chat contract"
        );
        Ok(Arc::new(ChainClient::connect(&config)))
    }
}
