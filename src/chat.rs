//! Chat session domain types
//!
//! Messages, sessions, the process-wide history and the assistant reply
//! decoder shared by the coordinator and the HTTP layer.

mod error;
pub mod history;
mod parser;
mod reader;
mod types;

pub use error::ChatError;
pub use history::SharedHistory;
pub use parser::parse_assistant_response;
pub use reader::read_new_messages;
pub use types::*;
