//! Process-wide chat history

use super::Message;
use crate::runtime::HistoryStore;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Append-only transcript shared by every request in the process.
///
/// Not partitioned by session: concurrent chats interleave into one log.
/// Each append is atomic, so a single request's own messages keep their order.
#[derive(Debug, Default)]
pub struct SharedHistory {
    messages: RwLock<Vec<Message>>,
}

impl SharedHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for SharedHistory {
    async fn append(&self, message: Message) {
        self.messages.write().await.push(message);
    }

    async fn transcript(&self) -> String {
        self.messages
            .read()
            .await
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    async fn messages(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }
}
