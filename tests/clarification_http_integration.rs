//! Integration tests for clarification HTTP endpoints.
//!
//! These tests drive the full router with a scripted agent, verifying
//! request validation, turn projection, script delivery, and error mapping
//! end to end.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use clarify_scope::adapters::ai::MockConversationAgent;
use clarify_scope::adapters::http::{api_router, ClarificationAppState};
use clarify_scope::adapters::storage::InMemoryConversationStore;
use clarify_scope::application::handlers::{
    SendClarificationMessageHandler, StartClarificationHandler,
};
use clarify_scope::domain::interview::{Message, MessageContent, ToolInvocation};
use clarify_scope::ports::{AIError, AgentError};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn test_app(agent: MockConversationAgent) -> axum::Router {
    let sessions = Arc::new(InMemoryConversationStore::new());
    let agent = Arc::new(agent);
    let state = ClarificationAppState::new(
        Arc::new(StartClarificationHandler::new(
            sessions.clone(),
            agent.clone(),
        )),
        Arc::new(SendClarificationMessageHandler::new(sessions, agent)),
    );
    api_router(state)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_response(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = serde_json::from_slice(&bytes).expect("Invalid JSON response");
    (status, value)
}

/// An agent turn that emits a finished interview script and narrates it.
fn emit_script_turn() -> Vec<Message> {
    let script = json!({
        "type": "interview_script",
        "introduction": "Thanks for joining. We want to hear about your trial.",
        "questions": [
            { "question": "What made you start the trial?", "intent": "Uncover the triggering need" },
            { "question": "Where did you get stuck?" }
        ],
        "closing": "Thank you, that was very helpful."
    });

    vec![
        Message::assistant_with_tools(
            MessageContent::Text(String::new()),
            vec![ToolInvocation::new(
                "call_1",
                "emit_interview_script",
                json!({ "script": script }),
            )],
        ),
        Message::tool("call_1", "Interview script received."),
        Message::assistant("Here is your finished interview script."),
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn start_returns_banner_then_first_reply() {
    let agent = MockConversationAgent::new()
        .with_turn(vec![Message::assistant("What outcome matters most to you?")]);
    let app = test_app(agent);

    let (status, body) = json_response(
        &app,
        post_json(
            "/api/clarification/start",
            json!({ "research_goal": "  Understand churn in trial users  " }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "in_progress");
    assert!(body["script"].is_null());

    let id = body["conversation_id"].as_str().unwrap();
    assert!(id.parse::<uuid::Uuid>().is_ok());

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(
        messages[0]["content"],
        "User research goal:\nUnderstand churn in trial users"
    );
    assert_eq!(messages[1]["role"], "assistant");
    assert_eq!(messages[1]["content"], "What outcome matters most to you?");
    assert!(messages[1]["id"].as_str().is_some());
}

#[tokio::test]
async fn distinct_starts_get_distinct_session_ids() {
    let app = test_app(MockConversationAgent::new());

    let (_, first) = json_response(
        &app,
        post_json(
            "/api/clarification/start",
            json!({ "research_goal": "Study onboarding friction" }),
        ),
    )
    .await;
    let (_, second) = json_response(
        &app,
        post_json(
            "/api/clarification/start",
            json!({ "research_goal": "Study onboarding friction" }),
        ),
    )
    .await;

    assert_ne!(first["conversation_id"], second["conversation_id"]);
}

#[tokio::test]
async fn short_goal_is_rejected_with_422() {
    let app = test_app(MockConversationAgent::new());

    let (status, body) = json_response(
        &app,
        post_json("/api/clarification/start", json!({ "research_goal": " ab " })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert!(body["message"].as_str().unwrap().contains("research_goal"));
}

#[tokio::test]
async fn blank_message_is_rejected_with_422() {
    let agent = MockConversationAgent::new().with_turn(vec![Message::assistant("First question?")]);
    let app = test_app(agent);

    let (_, started) = json_response(
        &app,
        post_json(
            "/api/clarification/start",
            json!({ "research_goal": "Study churn" }),
        ),
    )
    .await;

    let (status, body) = json_response(
        &app,
        post_json(
            "/api/clarification/message",
            json!({
                "conversation_id": started["conversation_id"],
                "message": "   "
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn unknown_conversation_returns_404() {
    let app = test_app(MockConversationAgent::new());

    let (status, body) = json_response(
        &app,
        post_json(
            "/api/clarification/message",
            json!({
                "conversation_id": uuid::Uuid::new_v4().to_string(),
                "message": "hello"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "Conversation not found.");
}

#[tokio::test]
async fn unparseable_conversation_id_returns_404() {
    let app = test_app(MockConversationAgent::new());

    let (status, body) = json_response(
        &app,
        post_json(
            "/api/clarification/message",
            json!({ "conversation_id": "not-a-uuid", "message": "hello" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Conversation not found.");
}

#[tokio::test]
async fn full_flow_completes_with_script() {
    let agent = MockConversationAgent::new()
        .with_turn(vec![Message::assistant(
            "Who do you want to interview, and what should we learn?",
        )])
        .with_turn(emit_script_turn());
    let app = test_app(agent);

    let (_, started) = json_response(
        &app,
        post_json(
            "/api/clarification/start",
            json!({ "research_goal": "Understand churn in trial users" }),
        ),
    )
    .await;
    assert_eq!(started["status"], "in_progress");

    let (status, body) = json_response(
        &app,
        post_json(
            "/api/clarification/message",
            json!({
                "conversation_id": started["conversation_id"],
                "message": "yes, looks good"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "completed");
    assert_eq!(body["script"]["type"], "interview_script");
    assert_eq!(body["script"]["questions"].as_array().unwrap().len(), 2);
    assert_eq!(
        body["script"]["questions"][0]["intent"],
        "Uncover the triggering need"
    );

    // Only entries from this turn come back, with the tool reply narrated
    // as an assistant entry.
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "assistant");
    assert_eq!(messages[0]["content"], "Interview script received.");
    assert_eq!(
        messages[1]["content"],
        "Here is your finished interview script."
    );
}

#[tokio::test]
async fn agent_failure_maps_to_upstream_error() {
    let agent = MockConversationAgent::new()
        .with_turn(vec![Message::assistant("First question?")])
        .with_failure(AgentError::RoundLimitExceeded { max_rounds: 8 });
    let app = test_app(agent);

    let (_, started) = json_response(
        &app,
        post_json(
            "/api/clarification/start",
            json!({ "research_goal": "Study churn" }),
        ),
    )
    .await;

    let (status, body) = json_response(
        &app,
        post_json(
            "/api/clarification/message",
            json!({
                "conversation_id": started["conversation_id"],
                "message": "tell me more"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "UPSTREAM_FAILED");
    assert_eq!(body["message"], "Failed to process clarification message.");
}

#[tokio::test]
async fn missing_api_key_maps_to_not_configured() {
    let agent =
        MockConversationAgent::new().with_failure(AgentError::from(AIError::NotConfigured));
    let app = test_app(agent);

    let (status, body) = json_response(
        &app,
        post_json(
            "/api/clarification/start",
            json!({ "research_goal": "Study churn" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "NOT_CONFIGURED");
    assert_eq!(body["message"], "OPENAI_API_KEY is not configured.");
}
