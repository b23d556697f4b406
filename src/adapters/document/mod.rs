//! Document adapters - Implementations for artifact storage.
//!
//! This module provides adapters for the document-related ports:
//! - `LocalJsonDocumentStore` - Stores interview JSON in a sandboxed directory

mod local_json_store;

pub use local_json_store::LocalJsonDocumentStore;
