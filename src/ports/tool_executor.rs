//! Tool Executor Port - Interface for executing model-requested tools.
//!
//! The agent loop stays tool-agnostic: it asks the executor for tool
//! definitions to advertise and hands every invocation over for execution,
//! receiving back the text that becomes the tool reply message.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::interview::{ToolDefinition, ToolInvocation};

use super::document_store::DocumentStoreError;

/// Port for executing tool invocations requested by the model.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Executes one invocation and returns its textual reply.
    async fn execute(&self, invocation: &ToolInvocation) -> Result<String, ToolExecutionError>;

    /// Definitions of every tool this executor offers, in the order they are
    /// advertised to the model.
    fn definitions(&self) -> Vec<ToolDefinition>;
}

/// Tool execution errors.
#[derive(Debug, Error)]
pub enum ToolExecutionError {
    /// The invocation named a tool outside the advertised set.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments did not match the tool's schema.
    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),

    /// The action argument was outside the supported set.
    #[error("Unsupported action. Use 'read', 'write', or 'append'.")]
    UnsupportedAction,

    /// A write or append was requested without content.
    #[error("Content is required for write or append operations.")]
    ContentRequired,

    /// The underlying document operation failed.
    #[error(transparent)]
    Document(#[from] DocumentStoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_required_uses_caller_facing_message() {
        assert_eq!(
            ToolExecutionError::ContentRequired.to_string(),
            "Content is required for write or append operations."
        );
    }

    #[test]
    fn unsupported_action_uses_caller_facing_message() {
        assert_eq!(
            ToolExecutionError::UnsupportedAction.to_string(),
            "Unsupported action. Use 'read', 'write', or 'append'."
        );
    }

    #[test]
    fn document_errors_pass_through_transparently() {
        let err: ToolExecutionError = DocumentStoreError::EmptyFileName.into();
        assert_eq!(err.to_string(), "File name cannot be empty.");
    }
}
