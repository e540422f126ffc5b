//! Mock implementations for testing
//!
//! These mocks enable coordinator and handler tests without a chain.

use super::traits::*;
use crate::chain::ChainError;
use crate::chat::{ChatError, RawLogEntry};
use crate::config::ConfigError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

// ============================================================================
// Mock Contract
// ============================================================================

/// Mock chat contract with a single in-memory session log.
///
/// Each read first applies the next scripted append (if any), so a test can
/// make the oracle's reply appear on a chosen poll.
pub struct MockContract {
    session_id: u64,
    session_error: Option<ChatError>,
    echo_submissions: bool,
    log: Mutex<Vec<RawLogEntry>>,
    scripted_appends: Mutex<VecDeque<Vec<RawLogEntry>>>,
    read_error: Mutex<Option<ChainError>>,
    transcripts: Mutex<Vec<String>>,
    reads: Mutex<Vec<(u64, usize)>>,
    read_times: Mutex<Vec<Instant>>,
}

impl MockContract {
    pub fn new(session_id: u64) -> Self {
        Self {
            session_id,
            session_error: None,
            echo_submissions: false,
            log: Mutex::new(Vec::new()),
            scripted_appends: Mutex::new(VecDeque::new()),
            read_error: Mutex::new(None),
            transcripts: Mutex::new(Vec::new()),
            reads: Mutex::new(Vec::new()),
            read_times: Mutex::new(Vec::new()),
        }
    }

    /// Make `create_session` fail with `error`
    pub fn with_session_error(mut self, error: ChatError) -> Self {
        self.session_error = Some(error);
        self
    }

    /// Write each submitted transcript into the log as a `user` entry, like
    /// the deployed contract does
    pub fn echo_submissions(mut self) -> Self {
        self.echo_submissions = true;
        self
    }

    /// Append entries to the log immediately
    pub fn push_entries(&self, entries: Vec<RawLogEntry>) {
        self.log.lock().unwrap().extend(entries);
    }

    /// Queue one append per future read
    pub fn script_appends(&self, appends: Vec<Vec<RawLogEntry>>) {
        self.scripted_appends.lock().unwrap().extend(appends);
    }

    /// Fail every subsequent read with `error`
    pub fn fail_reads_with(&self, error: ChainError) {
        *self.read_error.lock().unwrap() = Some(error);
    }

    pub fn recorded_transcripts(&self) -> Vec<String> {
        self.transcripts.lock().unwrap().clone()
    }

    pub fn recorded_reads(&self) -> Vec<(u64, usize)> {
        self.reads.lock().unwrap().clone()
    }

    pub fn recorded_read_times(&self) -> Vec<Instant> {
        self.read_times.lock().unwrap().clone()
    }

    /// Number of calls of any kind made against the contract
    pub fn call_count(&self) -> usize {
        self.transcripts.lock().unwrap().len() + self.reads.lock().unwrap().len()
    }
}

#[async_trait]
impl SessionSubmitter for MockContract {
    async fn create_session(&self, transcript: &str) -> Result<u64, ChatError> {
        self.transcripts
            .lock()
            .unwrap()
            .push(transcript.to_string());

        if let Some(error) = &self.session_error {
            return Err(error.clone());
        }
        if self.echo_submissions {
            self.push_entries(vec![RawLogEntry::new("user", transcript)]);
        }
        Ok(self.session_id)
    }
}

#[async_trait]
impl MessageLogReader for MockContract {
    async fn read_messages(
        &self,
        session_id: u64,
        start_index: usize,
    ) -> Result<Vec<RawLogEntry>, ChainError> {
        self.reads.lock().unwrap().push((session_id, start_index));
        self.read_times.lock().unwrap().push(Instant::now());

        if let Some(error) = self.read_error.lock().unwrap().clone() {
            return Err(error);
        }
        if session_id != self.session_id {
            return Err(ChainError::contract(format!("unknown chat {session_id}")));
        }

        let mut log = self.log.lock().unwrap();
        if let Some(append) = self.scripted_appends.lock().unwrap().pop_front() {
            log.extend(append);
        }
        Ok(log.iter().skip(start_index).cloned().collect())
    }
}

// ============================================================================
// Mock Connector
// ============================================================================

/// Connector that hands out a shared [`MockContract`] or a configuration error
pub struct MockConnector {
    contract: Result<Arc<MockContract>, ConfigError>,
    connects: AtomicUsize,
}

impl MockConnector {
    pub fn new(contract: Arc<MockContract>) -> Self {
        Self {
            contract: Ok(contract),
            connects: AtomicUsize::new(0),
        }
    }

    pub fn misconfigured(error: ConfigError) -> Self {
        Self {
            contract: Err(error),
            connects: AtomicUsize::new(0),
        }
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

impl ContractConnector for MockConnector {
    fn connect(&self) -> Result<Arc<dyn ChatContract>, ConfigError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        let contract = self.contract.clone()?;
        Ok(contract)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_contract_scripted_appends() {
        let contract = MockContract::new(3);
        contract.script_appends(vec![vec![], vec![RawLogEntry::new("assistant", "hi")]]);

        assert!(contract.read_messages(3, 0).await.unwrap().is_empty());
        let second = contract.read_messages(3, 0).await.unwrap();
        assert_eq!(second, vec![RawLogEntry::new("assistant", "hi")]);
        // Script exhausted: log stays as it is
        assert_eq!(contract.read_messages(3, 0).await.unwrap().len(), 1);
        assert_eq!(contract.recorded_reads(), vec![(3, 0); 3]);
    }

    #[tokio::test]
    async fn test_mock_contract_unknown_session() {
        let contract = MockContract::new(3);
        assert!(contract.read_messages(4, 0).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_contract_echoes_submissions() {
        let contract = MockContract::new(3).echo_submissions();
        assert_eq!(contract.create_session("hello").await.unwrap(), 3);
        assert_eq!(
            contract.read_messages(3, 0).await.unwrap(),
            vec![RawLogEntry::new("user", "hello")]
        );
        assert_eq!(contract.call_count(), 2);
    }

    #[test]
    fn test_mock_connector_counts_connects() {
        let connector = MockConnector::misconfigured(ConfigError::Missing("RPC_URL"));
        assert!(connector.connect().is_err());
        assert_eq!(connector.connect_count(), 1);
    }
}
