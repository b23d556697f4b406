//! AI Adapters.
//!
//! Implementations of the AIProvider and ConversationAgent ports.
//!
//! ## Available Adapters
//!
//! - `OpenAIProvider` - OpenAI chat completions with function tools
//! - `UnconfiguredProvider` - Stand-in when no credential is configured
//! - `ClarifyAgent` - Tool-dispatching reasoning loop for clarification
//! - `MockAIProvider` - Configurable provider mock for testing
//! - `MockConversationAgent` - Scripted agent mock for testing

mod clarify_agent;
mod mock_agent;
mod mock_provider;
mod openai_provider;
mod unconfigured_provider;

pub use clarify_agent::{ClarifyAgent, CLARIFY_SCOPE_PROMPT};
pub use mock_agent::{MockConversationAgent, MockTurn};
pub use mock_provider::{MockAIProvider, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
pub use unconfigured_provider::UnconfiguredProvider;
