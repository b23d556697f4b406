//! SendClarificationMessage command handler.
//!
//! Appends a researcher reply to an existing session, runs one reasoning
//! pass, and returns only the messages produced by that pass. Turns against
//! the same session are serialized through [`SessionLocks`], so concurrent
//! replies cannot overwrite each other's history.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{ConversationId, ValidationError};
use crate::domain::interview::{
    extract_script, project, DisplayMessage, InterviewScript, Message, SessionStatus,
};
use crate::ports::{AgentError, ConversationAgent, ConversationStore, ConversationStoreError};

use super::session_locks::SessionLocks;

/// Command to continue a clarification session.
#[derive(Debug, Clone)]
pub struct SendClarificationMessageCommand {
    /// Identifier returned by the start handler.
    pub conversation_id: ConversationId,
    /// Researcher reply to the assistant.
    pub message: String,
}

impl SendClarificationMessageCommand {
    pub fn new(conversation_id: ConversationId, message: impl Into<String>) -> Self {
        Self {
            conversation_id,
            message: message.into(),
        }
    }
}

/// Errors that can occur when continuing a session.
#[derive(Debug, Error)]
pub enum SendClarificationMessageError {
    /// The message failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The reasoning pass failed.
    #[error(transparent)]
    Agent(#[from] AgentError),

    /// The session does not exist, or persistence failed.
    #[error(transparent)]
    Store(#[from] ConversationStoreError),
}

/// Result of continuing a session.
#[derive(Debug, Clone)]
pub struct SendClarificationMessageResult {
    /// User-facing messages produced by this pass only.
    pub messages: Vec<DisplayMessage>,
    /// Whether this pass produced a script.
    pub status: SessionStatus,
    /// The extracted script, when one was produced.
    pub script: Option<InterviewScript>,
}

/// Handler for SendClarificationMessage commands.
pub struct SendClarificationMessageHandler {
    sessions: Arc<dyn ConversationStore>,
    agent: Arc<dyn ConversationAgent>,
    locks: SessionLocks,
}

impl SendClarificationMessageHandler {
    /// Creates a new handler with the given dependencies.
    pub fn new(sessions: Arc<dyn ConversationStore>, agent: Arc<dyn ConversationAgent>) -> Self {
        Self {
            sessions,
            agent,
            locks: SessionLocks::new(),
        }
    }

    /// Handles a continue command.
    pub async fn handle(
        &self,
        cmd: SendClarificationMessageCommand,
    ) -> Result<SendClarificationMessageResult, SendClarificationMessageError> {
        // 1. Validate the reply
        let message = cmd.message.trim();
        if message.is_empty() {
            return Err(ValidationError::empty_field("message").into());
        }

        // 2. Reject unknown sessions before taking a turn lock, so probes
        //    with random ids never allocate lock entries
        if !self.sessions.exists(&cmd.conversation_id).await? {
            return Err(ConversationStoreError::NotFound(cmd.conversation_id).into());
        }

        // 3. One turn at a time per session
        let _turn = self.locks.acquire(cmd.conversation_id).await;

        // 4. Extend the history with the reply; the pre-append length marks
        //    where this turn's delta begins
        let mut history = self.sessions.get(&cmd.conversation_id).await?;
        let delta_start = history.len();
        history.push(Message::user(message));

        // 5. Reasoning pass. On failure the stored history still ends at the
        //    previous turn; the reply is not committed.
        let history = self.agent.invoke(history).await?;
        self.sessions
            .replace(&cmd.conversation_id, history.clone())
            .await?;

        // 6. Project and extract over this turn's delta only
        let messages = project(&history, delta_start);
        let script = extract_script(&history, delta_start);
        let status = match script {
            Some(_) => SessionStatus::Completed,
            None => SessionStatus::InProgress,
        };

        Ok(SendClarificationMessageResult {
            messages,
            status,
            script,
        })
    }
}
