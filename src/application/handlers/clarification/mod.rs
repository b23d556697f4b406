//! Clarification session handlers.

mod send_clarification_message;
mod session_locks;
mod start_clarification;

pub use send_clarification_message::{
    SendClarificationMessageCommand, SendClarificationMessageError,
    SendClarificationMessageHandler, SendClarificationMessageResult,
};
pub use session_locks::SessionLocks;
pub use start_clarification::{
    StartClarificationCommand, StartClarificationError, StartClarificationHandler,
    StartClarificationResult,
};
