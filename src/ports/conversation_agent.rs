//! Conversation Agent Port - Interface for one reasoning pass.
//!
//! A reasoning pass takes the current history, exchanges as many completion
//! rounds and tool executions as the model needs, and returns the extended
//! history. Implementations hold no session state and commit nothing;
//! persistence is the caller's concern, so a failed pass leaves the stored
//! history untouched.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::interview::Message;

use super::ai_provider::AIError;

/// Port for running one reasoning pass over a conversation.
#[async_trait]
pub trait ConversationAgent: Send + Sync {
    /// Runs one pass and returns the input history plus every message
    /// produced during it (assistant turns and tool replies, in order).
    async fn invoke(&self, history: Vec<Message>) -> Result<Vec<Message>, AgentError>;
}

/// Agent invocation errors.
#[derive(Debug, Clone, Error)]
pub enum AgentError {
    /// The underlying provider call failed.
    #[error(transparent)]
    Provider(#[from] AIError),

    /// The model kept requesting tools past the round limit.
    #[error("tool dispatch did not settle within {max_rounds} rounds")]
    RoundLimitExceeded { max_rounds: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_pass_through_transparently() {
        let err: AgentError = AIError::rate_limited(30).into();
        assert_eq!(err.to_string(), "rate limited: retry after 30s");
    }

    #[test]
    fn round_limit_displays_configured_bound() {
        let err = AgentError::RoundLimitExceeded { max_rounds: 8 };
        assert_eq!(err.to_string(), "tool dispatch did not settle within 8 rounds");
    }
}
