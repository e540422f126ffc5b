//! Pure state transition function

use super::{ChatContext, ChatState, Effect, Event};
use crate::chat::{parse_assistant_response, ChatError, ChatSession, Message};
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ChatState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ChatState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

impl From<TransitionError> for ChatError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::InvalidTransition(msg) => ChatError::InvalidTransition(msg),
        }
    }
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs and performs
/// no I/O.
pub fn transition(
    state: &ChatState,
    context: &ChatContext,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // ============================================================
        // Submission
        // ============================================================

        // The user message is recorded before the transcript is built so
        // the submitted conversation includes it.
        (ChatState::Idle, Event::UserMessage { text }) => {
            Ok(TransitionResult::new(ChatState::AwaitingSubmission)
                .with_effect(Effect::AppendHistory {
                    message: Message::user(text),
                })
                .with_effect(Effect::SubmitTranscript))
        }

        (ChatState::AwaitingSubmission, Event::SessionCreated { session_id }) => {
            let session = ChatSession::new(session_id);
            Ok(TransitionResult::new(ChatState::AwaitingReply {
                session,
                cursor: session.start_index,
                polls: 0,
            })
            .with_effect(Effect::ReadMessages {
                session_id,
                start_index: session.start_index,
            }))
        }

        (ChatState::AwaitingSubmission, Event::SubmissionFailed { error }) => {
            Ok(TransitionResult::new(ChatState::Failed { error }))
        }

        // ============================================================
        // Reply polling
        // ============================================================
        (
            ChatState::AwaitingReply {
                session,
                cursor,
                polls,
            },
            Event::MessagesRead { messages },
        ) => {
            // First assistant message in log order wins; later ones in the
            // same batch are left unobserved.
            if let Some(position) = messages.iter().position(Message::is_assistant) {
                let reply = &messages[position];
                return Ok(TransitionResult::new(ChatState::Done {
                    session: *session,
                    cursor: cursor + position + 1,
                    response: parse_assistant_response(&reply.content),
                })
                .with_effect(Effect::AppendHistory {
                    message: reply.clone(),
                }));
            }

            let polls = polls + 1;
            if let Some(max) = context.max_polls.filter(|max| polls >= *max) {
                return Ok(TransitionResult::new(ChatState::Failed {
                    error: ChatError::ReplyTimeout(max),
                }));
            }

            Ok(TransitionResult::new(ChatState::AwaitingReply {
                session: *session,
                cursor: *cursor,
                polls,
            })
            .with_effect(Effect::ScheduleRetry {
                delay: context.poll_interval,
            }))
        }

        (ChatState::AwaitingReply { session, cursor, .. }, Event::PollTimerFired) => {
            Ok(TransitionResult::new(state.clone()).with_effect(Effect::ReadMessages {
                session_id: session.id,
                start_index: *cursor,
            }))
        }

        (ChatState::AwaitingReply { .. }, Event::ReadFailed { error }) => {
            Ok(TransitionResult::new(ChatState::Failed {
                error: ChatError::LogRead(error),
            }))
        }

        // ============================================================
        // Everything else
        // ============================================================
        (state, event) => Err(TransitionError::InvalidTransition(format!(
            "{event:?} in state {}",
            state.name()
        ))),
    }
}
