//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod clarification;

pub use clarification::{
    // Handlers
    SendClarificationMessageHandler,
    StartClarificationHandler,
    // Commands and Results
    SendClarificationMessageCommand,
    SendClarificationMessageError,
    SendClarificationMessageResult,
    StartClarificationCommand,
    StartClarificationError,
    StartClarificationResult,
    // Turn serialization
    SessionLocks,
};
