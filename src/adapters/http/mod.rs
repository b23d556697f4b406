//! HTTP adapters - REST API implementations.

pub mod clarification;
pub mod cors;

// Re-export key types for convenience
pub use clarification::{api_router, clarification_routes, ClarificationAppState};
pub use cors::cors_layer;
