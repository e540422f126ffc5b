//! Chat request executor

use super::traits::{ChatContract, HistoryStore, SessionSubmitter};
use crate::chat::{read_new_messages, AssistantResponse, ChatError};
use crate::state_machine::{transition, ChatContext, ChatState, Effect, Event};
use std::collections::VecDeque;

/// Drives one chat request from user message to assistant reply.
///
/// Generic over the contract and history implementations so tests can run
/// it against mocks.
pub struct ChatCoordinator<C, H>
where
    C: ChatContract,
    H: HistoryStore,
{
    context: ChatContext,
    state: ChatState,
    contract: C,
    history: H,
}

impl<C, H> ChatCoordinator<C, H>
where
    C: ChatContract,
    H: HistoryStore,
{
    pub fn new(context: ChatContext, contract: C, history: H) -> Self {
        Self {
            context,
            state: ChatState::Idle,
            contract,
            history,
        }
    }

    /// Submit `text` and poll until the oracle replies or the request fails.
    /// Events are processed in a loop, one effect at a time.
    pub async fn run(mut self, text: String) -> Result<AssistantResponse, ChatError> {
        let mut pending = VecDeque::from([Event::UserMessage { text }]);

        while let Some(event) = pending.pop_front() {
            let result = transition(&self.state, &self.context, event)?;

            if result.new_state.name() != self.state.name() {
                tracing::debug!(
                    from = self.state.name(),
                    to = result.new_state.name(),
                    "Chat state transition"
                );
            }
            self.state = result.new_state;

            for effect in result.effects {
                if let Some(next) = self.execute_effect(effect).await {
                    pending.push_back(next);
                }
            }
        }

        match self.state {
            ChatState::Done {
                session,
                cursor,
                response,
            } => {
                tracing::info!(session_id = session.id, cursor, "Assistant reply received");
                Ok(response)
            }
            ChatState::Failed { error } => {
                tracing::warn!(error = %error, "Chat request failed");
                Err(error)
            }
            other => Err(ChatError::InvalidTransition(format!(
                "stopped in state {}",
                other.name()
            ))),
        }
    }

    async fn execute_effect(&self, effect: Effect) -> Option<Event> {
        match effect {
            Effect::AppendHistory { message } => {
                self.history.append(message).await;
                None
            }

            Effect::SubmitTranscript => {
                let transcript = self.history.transcript().await;
                match self.contract.create_session(&transcript).await {
                    Ok(session_id) => {
                        tracing::info!(session_id, "Chat session created");
                        Some(Event::SessionCreated { session_id })
                    }
                    Err(error) => Some(Event::SubmissionFailed { error }),
                }
            }

            Effect::ReadMessages {
                session_id,
                start_index,
            } => match read_new_messages(&self.contract, session_id, start_index).await {
                Ok(messages) => Some(Event::MessagesRead { messages }),
                Err(error) => Some(Event::ReadFailed { error }),
            },

            Effect::ScheduleRetry { delay } => {
                tracing::debug!(delay_ms = delay.as_millis(), "No reply yet, waiting");
                tokio::time::sleep(delay).await;
                Some(Event::PollTimerFired)
            }
        }
    }
}
