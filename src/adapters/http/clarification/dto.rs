//! HTTP DTOs for clarification endpoints.
//!
//! Wire casing is snake_case throughout. The `script` field is always
//! serialized, as `null` until a session completes, so clients can poll one
//! stable shape.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{SendClarificationMessageResult, StartClarificationResult};
use crate::domain::interview::{DisplayMessage, DisplayRole, InterviewScript, SessionStatus};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request body for starting a clarification session.
#[derive(Debug, Clone, Deserialize)]
pub struct StartClarificationRequest {
    /// Full research goal description.
    pub research_goal: String,
}

/// Request body for continuing a clarification session.
#[derive(Debug, Clone, Deserialize)]
pub struct ClarificationMessageRequest {
    /// Conversation identifier returned by the start endpoint.
    pub conversation_id: String,
    /// Researcher reply to the assistant.
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// View of one transcript entry.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageView {
    /// Entry identifier (fresh per projection).
    pub id: String,
    /// Display role.
    pub role: DisplayRole,
    /// Entry text.
    pub content: String,
}

impl From<DisplayMessage> for ChatMessageView {
    fn from(entry: DisplayMessage) -> Self {
        Self {
            id: entry.id.to_string(),
            role: entry.role,
            content: entry.content,
        }
    }
}

/// Response body for the start endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ClarificationStartResponse {
    pub conversation_id: String,
    pub messages: Vec<ChatMessageView>,
    pub status: SessionStatus,
    pub script: Option<InterviewScript>,
}

impl From<StartClarificationResult> for ClarificationStartResponse {
    fn from(result: StartClarificationResult) -> Self {
        Self {
            conversation_id: result.conversation_id.to_string(),
            messages: result.messages.into_iter().map(Into::into).collect(),
            status: result.status,
            script: result.script,
        }
    }
}

/// Response body for the message endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ClarificationMessageResponse {
    pub messages: Vec<ChatMessageView>,
    pub status: SessionStatus,
    pub script: Option<InterviewScript>,
}

impl From<SendClarificationMessageResult> for ClarificationMessageResponse {
    fn from(result: SendClarificationMessageResult) -> Self {
        Self {
            messages: result.messages.into_iter().map(Into::into).collect(),
            status: result.status,
            script: result.script,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error Response
// ════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn not_configured(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_CONFIGURED".to_string(),
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self {
            code: "UPSTREAM_FAILED".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ConversationId;
    use serde_json::json;

    #[test]
    fn start_response_serializes_null_script_until_completed() {
        let response = ClarificationStartResponse {
            conversation_id: ConversationId::new().to_string(),
            messages: vec![ChatMessageView::from(DisplayMessage::system(
                "User research goal:\nStudy churn",
            ))],
            status: SessionStatus::InProgress,
            script: None,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "in_progress");
        assert!(value.get("script").is_some());
        assert!(value["script"].is_null());
        assert_eq!(value["messages"][0]["role"], "system");
    }

    #[test]
    fn message_response_embeds_script_when_completed() {
        let script: InterviewScript = serde_json::from_value(json!({
            "type": "interview_script",
            "introduction": "Welcome.",
            "questions": [{ "question": "What changed?" }]
        }))
        .unwrap();

        let response = ClarificationMessageResponse {
            messages: Vec::new(),
            status: SessionStatus::Completed,
            script: Some(script),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "completed");
        assert_eq!(value["script"]["type"], "interview_script");
        assert_eq!(value["script"]["questions"][0]["question"], "What changed?");
    }

    #[test]
    fn chat_message_view_keeps_entry_fields() {
        let entry = DisplayMessage::assistant("What does success look like?");
        let id = entry.id.to_string();

        let view = ChatMessageView::from(entry);

        assert_eq!(view.id, id);
        assert_eq!(view.role, DisplayRole::Assistant);
        assert_eq!(view.content, "What does success look like?");
    }

    #[test]
    fn error_response_codes() {
        assert_eq!(ErrorResponse::validation("x").code, "VALIDATION_FAILED");
        assert_eq!(ErrorResponse::not_found("x").code, "NOT_FOUND");
        assert_eq!(ErrorResponse::not_configured("x").code, "NOT_CONFIGURED");
        assert_eq!(ErrorResponse::upstream("x").code, "UPSTREAM_FAILED");
        assert_eq!(ErrorResponse::internal("x").code, "INTERNAL_ERROR");
    }
}
