//! Storage Adapters
//!
//! Implementations of the ConversationStore port for persisting session
//! histories.
//!
//! ## Available Adapters
//!
//! - **InMemoryConversationStore** - Holds histories in a process-local map
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryConversationStore;
//!
//! let store = InMemoryConversationStore::new();
//! ```

mod in_memory_conversation_store;

pub use in_memory_conversation_store::InMemoryConversationStore;
