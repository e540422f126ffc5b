//! Runtime for executing chat requests
//!
//! Drives the pure state machine against the chat contract and the
//! history store.

mod executor;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use executor::ChatCoordinator;
pub use traits::*;

use crate::chat::{AssistantResponse, ChatError};
use crate::state_machine::ChatContext;
use std::sync::Arc;

/// Type alias for the coordinator used by HTTP handlers
pub type ProductionCoordinator =
    ChatCoordinator<Arc<dyn ChatContract>, Arc<dyn HistoryStore>>;

/// Relay one user message and wait for the oracle's reply
pub async fn relay_message(
    context: ChatContext,
    contract: Arc<dyn ChatContract>,
    history: Arc<dyn HistoryStore>,
    text: String,
) -> Result<AssistantResponse, ChatError> {
    let coordinator: ProductionCoordinator = ChatCoordinator::new(context, contract, history);
    coordinator.run(text).await
}
