//! Message entity - one entry in a session's raw conversation history.
//!
//! Raw history is the ground truth the language model sees on every
//! invocation. It carries all four roles, including system and tool entries
//! that are never shown to end users directly.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::tool_call::ToolInvocation;

/// Role of a raw history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions (guides model behavior).
    System,
    /// End-user input.
    User,
    /// Model output, possibly carrying tool invocations.
    Assistant,
    /// Output of a tool execution, answering one invocation.
    Tool,
}

impl Role {
    /// Returns the lowercase wire name of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One typed chunk of structured message content.
///
/// Providers may deliver content as a list of typed parts instead of a plain
/// string. Only text parts carry anything we surface; every other kind
/// deserializes to [`ContentChunk::Other`] and flattens to nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentChunk {
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Message content: a plain string or a sequence of typed chunks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Chunks(Vec<ContentChunk>),
}

impl MessageContent {
    /// Flattens content to plain text.
    ///
    /// Chunk sequences concatenate their text chunks in order; non-text
    /// chunks contribute nothing.
    pub fn to_text(&self) -> String {
        match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Chunks(chunks) => chunks
                .iter()
                .filter_map(|chunk| match chunk {
                    ContentChunk::Text { text } => Some(text.as_str()),
                    ContentChunk::Other => None,
                })
                .collect(),
        }
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Text(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}

/// A single entry in a session's raw history.
///
/// # Invariants
///
/// - `tool_calls` is non-empty only on assistant messages
/// - `tool_call_id` is present only on tool messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Who produced this entry.
    role: Role,

    /// Entry content (plain text or typed chunks).
    content: MessageContent,

    /// Tool invocations requested by the model in this turn.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tool_calls: Vec<ToolInvocation>,

    /// Identifier of the invocation this entry answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    /// Creates an assistant message with plain text content.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Text(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    /// Creates an assistant message carrying tool invocations.
    pub fn assistant_with_tools(content: MessageContent, tool_calls: Vec<ToolInvocation>) -> Self {
        Self {
            role: Role::Assistant,
            content,
            tool_calls,
            tool_call_id: None,
        }
    }

    /// Creates a tool message answering the given invocation.
    pub fn tool(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: MessageContent::Text(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: Some(tool_call_id.into()),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &MessageContent {
        &self.content
    }

    pub fn tool_calls(&self) -> &[ToolInvocation] {
        &self.tool_calls
    }

    pub fn tool_call_id(&self) -> Option<&str> {
        self.tool_call_id.as_deref()
    }

    /// Flattens this entry's content to plain text.
    pub fn display_text(&self) -> String {
        self.content.to_text()
    }
}
