//! Chat session state machine
//!
//! Pure transitions in the Elm Architecture style: the transition function
//! maps a state and an event to a new state plus the effects the runtime
//! must perform. All I/O happens in the runtime.

mod effect;
mod event;
mod state;
mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{ChatContext, ChatState};
pub use transition::{transition, TransitionError, TransitionResult};
