//! Axum routes for clarification endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{send_clarification_message, start_clarification, ClarificationAppState};

/// Creates routes for clarification endpoints.
///
/// REST Endpoints:
/// - POST /api/clarification/start - Start a clarification session
/// - POST /api/clarification/message - Continue a clarification session
pub fn clarification_routes() -> Router<ClarificationAppState> {
    Router::new()
        .route("/clarification/start", post(start_clarification))
        .route("/clarification/message", post(send_clarification_message))
}

/// Combined router with all clarification routes under /api.
pub fn api_router(state: ClarificationAppState) -> Router {
    Router::new()
        .nest("/api", clarification_routes())
        .with_state(state)
}
