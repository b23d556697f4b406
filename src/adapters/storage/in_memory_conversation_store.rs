//! In-Memory Conversation Store Adapter
//!
//! Holds session histories in a process-local map. Sessions live for the
//! process lifetime; there is no eviction, and a restart loses everything.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::ConversationId;
use crate::domain::interview::Message;
use crate::ports::{ConversationStore, ConversationStoreError};

/// In-memory storage for clarification session histories.
#[derive(Debug, Clone)]
pub struct InMemoryConversationStore {
    sessions: Arc<RwLock<HashMap<ConversationId, Vec<Message>>>>,
}

impl InMemoryConversationStore {
    /// Create a new in-memory store.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored sessions (useful for tests).
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    /// Get the number of stored sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemoryConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn create(
        &self,
        initial: Vec<Message>,
    ) -> Result<ConversationId, ConversationStoreError> {
        let id = ConversationId::new();
        let mut sessions = self.sessions.write().await;
        sessions.insert(id, initial);
        Ok(id)
    }

    async fn exists(&self, id: &ConversationId) -> Result<bool, ConversationStoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.contains_key(id))
    }

    async fn get(&self, id: &ConversationId) -> Result<Vec<Message>, ConversationStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(id)
            .cloned()
            .ok_or(ConversationStoreError::NotFound(*id))
    }

    async fn replace(
        &self,
        id: &ConversationId,
        history: Vec<Message>,
    ) -> Result<(), ConversationStoreError> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(id) {
            return Err(ConversationStoreError::NotFound(*id));
        }
        sessions.insert(*id, history);
        Ok(())
    }
}
