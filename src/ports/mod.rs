//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ConversationStore` - Session history persistence
//! - `DocumentStore` - Sandboxed JSON artifact persistence
//! - `AIProvider` - One completion round against a chat model
//! - `ToolExecutor` - Execution of model-requested tools
//! - `ConversationAgent` - One reasoning pass with tool dispatch

mod ai_provider;
mod conversation_agent;
mod conversation_store;
mod document_store;
mod tool_executor;

pub use ai_provider::{AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason};
pub use conversation_agent::{AgentError, ConversationAgent};
pub use conversation_store::{ConversationStore, ConversationStoreError};
pub use document_store::{AppendOutcome, DocumentStore, DocumentStoreError, ReadOutcome};
pub use tool_executor::{ToolExecutionError, ToolExecutor};
