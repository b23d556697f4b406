//! Transcript projection - raw history flattened for end users.
//!
//! Raw history carries system prompts, tool invocations, and tool replies
//! that end users never see. Each turn, only the newly appended slice of
//! history is projected into display entries; earlier turns were already
//! delivered and are never re-sent.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::MessageId;

use super::message::{Message, Role};

/// Role of a user-facing transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayRole {
    System,
    User,
    Assistant,
}

/// A user-facing transcript entry.
///
/// Display entries are minted fresh on every projection; their identifiers
/// are not stable across turns and exist only so clients can key list items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMessage {
    pub id: MessageId,
    pub role: DisplayRole,
    pub content: String,
}

impl DisplayMessage {
    /// Creates a system display entry.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: DisplayRole::System,
            content: content.into(),
        }
    }

    /// Creates an assistant display entry.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: DisplayRole::Assistant,
            content: content.into(),
        }
    }
}

/// Projects the slice of `history` starting at `start_index` into display
/// entries.
///
/// Assistant and tool entries surface their flattened text; tool output is
/// narrated in the assistant voice so file confirmations read as part of the
/// dialogue. Entries that are blank after trimming are suppressed. User and
/// system entries are never projected; the caller already has them.
pub fn project(history: &[Message], start_index: usize) -> Vec<DisplayMessage> {
    let mut entries = Vec::new();

    for message in history.iter().skip(start_index) {
        match message.role() {
            Role::Assistant | Role::Tool => {
                let text = message.display_text();
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    continue;
                }
                entries.push(DisplayMessage::assistant(trimmed));
            }
            Role::User | Role::System => {}
        }
    }

    entries
}

/// Synthetic opening entry that echoes the research goal at session start.
pub fn research_goal_banner(goal: &str) -> DisplayMessage {
    DisplayMessage::system(format!("User research goal:\n{}", goal))
}
