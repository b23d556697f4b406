//! HTTP handlers for clarification endpoints.
//!
//! These handlers connect Axum routes to application layer operations.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::application::handlers::{
    SendClarificationMessageCommand, SendClarificationMessageError, SendClarificationMessageHandler,
    StartClarificationCommand, StartClarificationError, StartClarificationHandler,
};
use crate::domain::foundation::ConversationId;
use crate::ports::{AIError, AgentError};

use super::dto::{
    ClarificationMessageRequest, ClarificationMessageResponse, ClarificationStartResponse,
    ErrorResponse, StartClarificationRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Shared application state for clarification handlers.
///
/// Handlers are held behind `Arc` so the per-session turn locks inside the
/// message handler survive across requests.
#[derive(Clone)]
pub struct ClarificationAppState {
    pub start_handler: Arc<StartClarificationHandler>,
    pub message_handler: Arc<SendClarificationMessageHandler>,
}

impl ClarificationAppState {
    /// Creates a new ClarificationAppState.
    pub fn new(
        start_handler: Arc<StartClarificationHandler>,
        message_handler: Arc<SendClarificationMessageHandler>,
    ) -> Self {
        Self {
            start_handler,
            message_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// POST /api/clarification/start
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/clarification/start - Start a clarification session.
///
/// Seeds a new session with the research goal and runs the first agent turn.
///
/// # Errors
/// - 422 Unprocessable Entity: Goal shorter than 3 characters after trimming
/// - 500 Internal Server Error: Missing API key, or the agent turn failed
pub async fn start_clarification(
    State(state): State<ClarificationAppState>,
    Json(req): Json<StartClarificationRequest>,
) -> Response {
    let cmd = StartClarificationCommand::new(req.research_goal);

    match state.start_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(ClarificationStartResponse::from(result)),
        )
            .into_response(),
        Err(e) => handle_start_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// POST /api/clarification/message
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/clarification/message - Continue a clarification session.
///
/// Appends the researcher's reply and runs one agent turn. Only transcript
/// entries produced by this turn are returned.
///
/// # Errors
/// - 404 Not Found: Unknown conversation identifier
/// - 422 Unprocessable Entity: Blank message
/// - 500 Internal Server Error: Missing API key, or the agent turn failed
pub async fn send_clarification_message(
    State(state): State<ClarificationAppState>,
    Json(req): Json<ClarificationMessageRequest>,
) -> Response {
    // Identifiers that fail to parse cannot name any stored session.
    let conversation_id: ConversationId = match req.conversation_id.parse() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found("Conversation not found.")),
            )
                .into_response()
        }
    };

    let cmd = SendClarificationMessageCommand::new(conversation_id, req.message);

    match state.message_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(ClarificationMessageResponse::from(result)),
        )
            .into_response(),
        Err(e) => handle_message_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Maps start errors to HTTP responses.
fn handle_start_error(error: StartClarificationError) -> Response {
    match error {
        StartClarificationError::Validation(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::validation(e.to_string())),
        )
            .into_response(),
        StartClarificationError::Agent(AgentError::Provider(AIError::NotConfigured)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::not_configured(
                "OPENAI_API_KEY is not configured.",
            )),
        )
            .into_response(),
        StartClarificationError::Agent(e) => {
            error!(error = %e, "agent turn failed while starting clarification session");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::upstream(
                    "Failed to start clarification session.",
                )),
            )
                .into_response()
        }
        StartClarificationError::Store(e) => {
            error!(error = %e, "session store failed while starting clarification session");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("An unexpected error occurred.")),
            )
                .into_response()
        }
    }
}

/// Maps message errors to HTTP responses.
fn handle_message_error(error: SendClarificationMessageError) -> Response {
    match error {
        SendClarificationMessageError::Validation(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::validation(e.to_string())),
        )
            .into_response(),
        SendClarificationMessageError::Store(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Conversation not found.")),
        )
            .into_response(),
        SendClarificationMessageError::Agent(AgentError::Provider(AIError::NotConfigured)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::not_configured(
                "OPENAI_API_KEY is not configured.",
            )),
        )
            .into_response(),
        SendClarificationMessageError::Agent(e) => {
            error!(error = %e, "agent turn failed while processing clarification message");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::upstream(
                    "Failed to process clarification message.",
                )),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;
    use crate::ports::ConversationStoreError;

    #[test]
    fn start_validation_error_maps_to_422() {
        let error =
            StartClarificationError::Validation(ValidationError::too_short("research_goal", 3));
        let response = handle_start_error(error);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn start_missing_api_key_maps_to_500() {
        let error = StartClarificationError::Agent(AgentError::Provider(AIError::NotConfigured));
        let response = handle_start_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn start_agent_failure_maps_to_500() {
        let error = StartClarificationError::Agent(AgentError::RoundLimitExceeded { max_rounds: 8 });
        let response = handle_start_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn message_unknown_session_maps_to_404() {
        let error = SendClarificationMessageError::Store(ConversationStoreError::NotFound(
            ConversationId::new(),
        ));
        let response = handle_message_error(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn message_blank_reply_maps_to_422() {
        let error =
            SendClarificationMessageError::Validation(ValidationError::empty_field("message"));
        let response = handle_message_error(error);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
