//! Conversation Store Port - Interface for session history persistence.
//!
//! Sessions are keyed by [`ConversationId`] and hold the full raw history.
//! The store only moves whole histories: callers load, mutate, and replace,
//! with turn serialization handled above this port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ConversationId;
use crate::domain::interview::Message;

/// Port for conversation history storage.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Creates a session seeded with the given history, returning a fresh id.
    async fn create(&self, initial: Vec<Message>) -> Result<ConversationId, ConversationStoreError>;

    /// Returns true if a session with this id exists.
    async fn exists(&self, id: &ConversationId) -> Result<bool, ConversationStoreError>;

    /// Returns the full history for a session.
    async fn get(&self, id: &ConversationId) -> Result<Vec<Message>, ConversationStoreError>;

    /// Replaces a session's entire history.
    async fn replace(
        &self,
        id: &ConversationId,
        history: Vec<Message>,
    ) -> Result<(), ConversationStoreError>;
}

/// Conversation store errors.
#[derive(Debug, Clone, Error)]
pub enum ConversationStoreError {
    /// No session exists for the given id.
    #[error("conversation not found: {0}")]
    NotFound(ConversationId),
}
