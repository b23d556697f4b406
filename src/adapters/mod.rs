//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Chat model providers and the clarification agent loop
//! - `document` - Sandboxed JSON artifact storage on the local filesystem
//! - `http` - Axum REST API
//! - `storage` - Session history persistence
//! - `tools` - Model-invocable tools

pub mod ai;
pub mod document;
pub mod http;
pub mod storage;
pub mod tools;
