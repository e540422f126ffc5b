//! On-chain chat contract client
//!
//! Bindings for the oracle-backed chat contract and the production
//! implementation of the session and log traits on top of an `alloy`
//! HTTP provider.

mod error;

pub use error::{ChainError, ChainErrorKind};

use crate::chat::{ChatError, ContentPart, RawLogEntry};
use crate::config::ChainConfig;
use crate::runtime::{MessageLogReader, SessionSubmitter};
use alloy::contract::Error as ContractError;
use alloy::network::EthereumWallet;
use alloy::primitives::U256;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::Log;
use alloy::sol;
use alloy::transports::RpcError;
use async_trait::async_trait;

sol! {
    #[sol(rpc)]
    contract ChatOracle {
        struct Content {
            string contentType;
            string value;
        }

        struct Message {
            string role;
            Content[] content;
        }

        event ChatCreated(address indexed owner, uint256 indexed chatId);

        function startChat(string memory message) public returns (uint256);

        function getMessageHistory(uint256 chatId) public view returns (Message[] memory);
    }
}

/// Chat contract client bound to one signer and contract address
#[derive(Clone)]
pub struct ChainClient {
    contract: ChatOracle::ChatOracleInstance<DynProvider>,
}

impl ChainClient {
    /// Build a signing HTTP provider for `config`. Nothing is sent until the
    /// first call.
    pub fn connect(config: &ChainConfig) -> Self {
        let wallet = EthereumWallet::from(config.signer.clone());
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(config.rpc_url.clone())
            .erased();

        Self {
            contract: ChatOracle::new(config.contract_address, provider),
        }
    }
}

/// A JSON-RPC error response means the node executed the call and rejected
/// it. Any other transport failure means the node was never reached.
fn classify_error(err: ContractError) -> ChainError {
    match err {
        ContractError::TransportError(RpcError::ErrorResp(payload)) => {
            ChainError::contract(format!("Call rejected: {payload}"))
        }
        ContractError::TransportError(e) => {
            ChainError::transport(format!("RPC request failed: {e}"))
        }
        other => ChainError::contract(other.to_string()),
    }
}

#[async_trait]
impl SessionSubmitter for ChainClient {
    async fn create_session(&self, transcript: &str) -> Result<u64, ChatError> {
        if transcript.is_empty() {
            return Err(ChatError::Submission(ChainError::invalid_input(
                "transcript is empty",
            )));
        }

        let pending = self
            .contract
            .startChat(transcript.to_string())
            .send()
            .await
            .map_err(|e| ChatError::Submission(classify_error(e)))?;

        let tx_hash = *pending.tx_hash();
        tracing::debug!(%tx_hash, "Chat transaction sent");

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| ChatError::Submission(ChainError::transport(e.to_string())))?;

        tracing::info!(
            %tx_hash,
            block = ?receipt.block_number,
            logs = receipt.inner.logs().len(),
            "Chat transaction confirmed"
        );

        session_id_from_logs(receipt.inner.logs()).ok_or(ChatError::SessionIdNotFound)
    }
}

#[async_trait]
impl MessageLogReader for ChainClient {
    async fn read_messages(
        &self,
        session_id: u64,
        start_index: usize,
    ) -> Result<Vec<RawLogEntry>, ChainError> {
        let history = self
            .contract
            .getMessageHistory(U256::from(session_id))
            .call()
            .await
            .map_err(classify_error)?;

        Ok(history
            .into_iter()
            .skip(start_index)
            .map(|message| RawLogEntry {
                role: message.role,
                content: message
                    .content
                    .into_iter()
                    .map(|part| ContentPart {
                        content_type: part.contentType,
                        value: part.value,
                    })
                    .collect(),
            })
            .collect())
    }
}

/// Session id of the first `ChatCreated` event in `logs`. Logs emitted by
/// other events are skipped, as is an id too large for `u64`.
pub fn session_id_from_logs(logs: &[Log]) -> Option<u64> {
    logs.iter()
        .filter_map(|log| log.log_decode::<ChatOracle::ChatCreated>().ok())
        .find_map(|event| u64::try_from(event.inner.data.chatId).ok())
}
