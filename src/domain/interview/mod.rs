//! Interview module - Clarification dialogue domain.
//!
//! Covers the raw conversation history the model sees, the user-facing
//! transcript projection, and the interview script artifact with its shape
//! validation and extraction rules.

mod extractor;
mod message;
mod script;
mod status;
mod tool_call;
mod tool_definition;
mod transcript;

pub use extractor::extract_script;
pub use message::{ContentChunk, Message, MessageContent, Role};
pub use script::{
    InterviewQuestion, InterviewScript, ScriptValidationError, INTERVIEW_SCRIPT_TYPE,
};
pub use status::SessionStatus;
pub use tool_call::{KnownTool, ToolInvocation};
pub use tool_definition::ToolDefinition;
pub use transcript::{project, research_goal_banner, DisplayMessage, DisplayRole};
