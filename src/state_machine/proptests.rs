//! Property-based tests for the chat state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use crate::chain::ChainError;
use crate::chat::{ChatError, ChatSession, Message, Role};
use proptest::prelude::*;
use std::time::Duration;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::User),
        Just(Role::Assistant),
        Just(Role::Other("system".to_string())),
    ]
}

fn arb_message() -> impl Strategy<Value = Message> {
    (arb_role(), "[a-zA-Z0-9 {}\":,]{0,40}").prop_map(|(role, content)| Message { role, content })
}

fn arb_non_assistant_message() -> impl Strategy<Value = Message> {
    arb_message().prop_filter("non-assistant", |m| !m.is_assistant())
}

fn arb_context() -> impl Strategy<Value = ChatContext> {
    (1u64..10_000, proptest::option::of(1u32..20)).prop_map(|(ms, max_polls)| ChatContext {
        poll_interval: Duration::from_millis(ms),
        max_polls,
    })
}

fn arb_awaiting_reply() -> impl Strategy<Value = ChatState> {
    (any::<u64>(), 0usize..1000, 0u32..10).prop_map(|(id, cursor, polls)| {
        ChatState::AwaitingReply {
            session: ChatSession::new(id),
            cursor,
            polls,
        }
    })
}

fn arb_state() -> impl Strategy<Value = ChatState> {
    prop_oneof![
        Just(ChatState::Idle),
        Just(ChatState::AwaitingSubmission),
        arb_awaiting_reply(),
        Just(ChatState::Failed {
            error: ChatError::SessionIdNotFound
        }),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        "[a-z ]{1,20}".prop_map(|text| Event::UserMessage { text }),
        any::<u64>().prop_map(|session_id| Event::SessionCreated { session_id }),
        Just(Event::SubmissionFailed {
            error: ChatError::SessionIdNotFound
        }),
        proptest::collection::vec(arb_message(), 0..6)
            .prop_map(|messages| Event::MessagesRead { messages }),
        Just(Event::ReadFailed {
            error: ChainError::transport("unreachable")
        }),
        Just(Event::PollTimerFired),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Same inputs, same outputs
    #[test]
    fn prop_transition_is_deterministic(
        state in arb_state(),
        context in arb_context(),
        event in arb_event(),
    ) {
        let first = transition(&state, &context, event.clone());
        let second = transition(&state, &context, event);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.new_state, b.new_state);
                prop_assert_eq!(a.effects, b.effects);
            }
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "transition outcome differed between calls"),
        }
    }

    /// Terminal states accept nothing
    #[test]
    fn prop_failed_is_absorbing(context in arb_context(), event in arb_event()) {
        let failed = ChatState::Failed { error: ChatError::SessionIdNotFound };
        prop_assert!(transition(&failed, &context, event).is_err());
    }

    /// A batch without an assistant message never moves the cursor
    #[test]
    fn prop_no_reply_keeps_cursor(
        state in arb_awaiting_reply(),
        context in arb_context(),
        messages in proptest::collection::vec(arb_non_assistant_message(), 0..6),
    ) {
        let ChatState::AwaitingReply { cursor, polls, .. } = state.clone() else {
            unreachable!()
        };
        let result = transition(&state, &context, Event::MessagesRead { messages }).unwrap();

        match result.new_state {
            ChatState::AwaitingReply { cursor: new_cursor, polls: new_polls, .. } => {
                prop_assert_eq!(new_cursor, cursor);
                prop_assert_eq!(new_polls, polls + 1);
                prop_assert_eq!(
                    result.effects,
                    vec![Effect::ScheduleRetry { delay: context.poll_interval }]
                );
            }
            ChatState::Failed { error: ChatError::ReplyTimeout(n) } => {
                prop_assert_eq!(Some(n), context.max_polls);
                prop_assert!(result.effects.is_empty());
            }
            other => prop_assert!(false, "unexpected state {:?}", other),
        }
    }

    /// Any batch with an assistant message completes, advancing the cursor
    /// to just past the first one
    #[test]
    fn prop_first_assistant_completes(
        state in arb_awaiting_reply(),
        context in arb_context(),
        messages in proptest::collection::vec(arb_message(), 0..8),
    ) {
        let ChatState::AwaitingReply { cursor, .. } = state.clone() else {
            unreachable!()
        };
        let Some(position) = messages.iter().position(Message::is_assistant) else {
            return Ok(());
        };
        let reply = messages[position].clone();

        let result = transition(&state, &context, Event::MessagesRead { messages }).unwrap();

        let ChatState::Done { cursor: new_cursor, .. } = result.new_state else {
            return Err(TestCaseError::fail("expected Done"));
        };
        prop_assert_eq!(new_cursor, cursor + position + 1);
        prop_assert_eq!(result.effects, vec![Effect::AppendHistory { message: reply }]);
    }
}
