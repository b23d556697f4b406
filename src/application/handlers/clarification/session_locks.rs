//! Per-session turn serialization.
//!
//! The conversation store moves whole histories, so two concurrent turns
//! against the same session would race on load-extend-replace and one would
//! silently overwrite the other. Each session gets one async mutex held for
//! the full span of a turn; different sessions never contend.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::ConversationId;

/// Registry of per-session turn locks.
///
/// Entries are created lazily on first acquisition and kept for the life of
/// the registry.
#[derive(Default)]
pub struct SessionLocks {
    locks: Mutex<HashMap<ConversationId, Arc<Mutex<()>>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the turn lock for one session, waiting behind any holder.
    pub async fn acquire(&self, id: ConversationId) -> OwnedMutexGuard<()> {
        let entry = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        entry.lock_owned().await
    }
}
