//! Incremental reads of a session's message log

use super::Message;
use crate::chain::ChainError;
use crate::runtime::MessageLogReader;

/// Messages at or after `start_index` in log order, each reduced to its
/// first content part. Errors from the source are returned unchanged.
pub async fn read_new_messages<R>(
    reader: &R,
    session_id: u64,
    start_index: usize,
) -> Result<Vec<Message>, ChainError>
where
    R: MessageLogReader + ?Sized,
{
    let entries = reader.read_messages(session_id, start_index).await?;
    tracing::debug!(session_id, start_index, count = entries.len(), "Read session log");
    Ok(entries
        .into_iter()
        .map(|entry| {
            if let Some(part) = entry.content.first().filter(|part| !part.is_text()) {
                tracing::debug!(
                    session_id,
                    content_type = %part.content_type,
                    "Reading non-text content part as text"
                );
            }
            entry.into_message()
        })
        .collect())
}
