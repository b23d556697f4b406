//! StartClarification command handler.
//!
//! Seeds a new session with the researcher's goal, runs the first reasoning
//! pass, and returns the opening transcript with the goal banner prepended.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{ConversationId, ValidationError};
use crate::domain::interview::{
    extract_script, project, research_goal_banner, DisplayMessage, InterviewScript, Message,
    SessionStatus,
};
use crate::ports::{AgentError, ConversationAgent, ConversationStore, ConversationStoreError};

/// Minimum length of a research goal, in characters after trimming.
const MIN_GOAL_CHARS: usize = 3;

/// Command to start a clarification session.
#[derive(Debug, Clone)]
pub struct StartClarificationCommand {
    /// Full research goal description.
    pub research_goal: String,
}

impl StartClarificationCommand {
    pub fn new(research_goal: impl Into<String>) -> Self {
        Self {
            research_goal: research_goal.into(),
        }
    }
}

/// Errors that can occur when starting a session.
#[derive(Debug, Error)]
pub enum StartClarificationError {
    /// The research goal failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The reasoning pass failed.
    #[error(transparent)]
    Agent(#[from] AgentError),

    /// Session persistence failed.
    #[error(transparent)]
    Store(#[from] ConversationStoreError),
}

/// Result of starting a session.
#[derive(Debug, Clone)]
pub struct StartClarificationResult {
    /// Identifier of the new session.
    pub conversation_id: ConversationId,
    /// Goal banner followed by every user-facing message from the first pass.
    pub messages: Vec<DisplayMessage>,
    /// Whether the first pass already produced a script.
    pub status: SessionStatus,
    /// The extracted script, when one was produced.
    pub script: Option<InterviewScript>,
}

/// Handler for StartClarification commands.
pub struct StartClarificationHandler {
    sessions: Arc<dyn ConversationStore>,
    agent: Arc<dyn ConversationAgent>,
}

impl StartClarificationHandler {
    /// Creates a new handler with the given dependencies.
    pub fn new(sessions: Arc<dyn ConversationStore>, agent: Arc<dyn ConversationAgent>) -> Self {
        Self { sessions, agent }
    }

    /// Handles a start command.
    pub async fn handle(
        &self,
        cmd: StartClarificationCommand,
    ) -> Result<StartClarificationResult, StartClarificationError> {
        // 1. Validate the goal
        let goal = cmd.research_goal.trim();
        if goal.chars().count() < MIN_GOAL_CHARS {
            return Err(ValidationError::too_short("research_goal", MIN_GOAL_CHARS).into());
        }

        // 2. Create the session seeded with the goal as the first user turn
        let seed = vec![Message::user(goal)];
        let conversation_id = self.sessions.create(seed.clone()).await?;

        // 3. First reasoning pass. On failure the session keeps its seed
        //    history and the error propagates to the caller.
        let history = self.agent.invoke(seed).await?;
        self.sessions
            .replace(&conversation_id, history.clone())
            .await?;

        // 4. Project everything after the seed, banner first
        let mut messages = vec![research_goal_banner(goal)];
        messages.extend(project(&history, 1));

        // 5. Completed iff this pass already emitted a valid script
        let script = extract_script(&history, 1);
        let status = match script {
            Some(_) => SessionStatus::Completed,
            None => SessionStatus::InProgress,
        };

        Ok(StartClarificationResult {
            conversation_id,
            messages,
            status,
            script,
        })
    }
}
