//! HTTP API for the oracle chat relay

mod handlers;
mod types;

pub use handlers::create_router;

use crate::chat::SharedHistory;
use crate::runtime::{ContractConnector, EnvConnector, HistoryStore};
use crate::state_machine::ChatContext;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub connector: Arc<dyn ContractConnector>,
    pub history: Arc<dyn HistoryStore>,
    pub context: ChatContext,
}

impl AppState {
    pub fn new(
        connector: Arc<dyn ContractConnector>,
        history: Arc<dyn HistoryStore>,
        context: ChatContext,
    ) -> Self {
        Self {
            connector,
            history,
            context,
        }
    }

    /// Environment-configured contract with one process-wide history
    pub fn from_env(context: ChatContext) -> Self {
        Self::new(
            Arc::new(EnvConnector),
            Arc::new(SharedHistory::new()),
            context,
        )
    }
}
