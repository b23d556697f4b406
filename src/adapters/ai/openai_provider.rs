//! OpenAI Provider - Implementation of AIProvider for OpenAI's API.
//!
//! Speaks the chat completions endpoint with function tools enabled. Tool
//! call arguments arrive JSON-encoded inside a string; they are decoded here
//! so domain code only ever sees structured values.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_model("gpt-4.1-mini")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let provider = OpenAIProvider::new(config);
//! ```
//!
//! Requests are single-shot: retry policy belongs to callers, which see
//! classified [`AIError`] values and can consult `is_retryable`.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use crate::domain::interview::{Message, MessageContent, ToolInvocation};
use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason};

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-4.1-mini", "gpt-4o").
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4.1-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI API provider implementation.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Creates a new OpenAI provider with the given configuration.
    pub fn new(config: OpenAIConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Converts our request to OpenAI's format.
    fn to_wire_request(&self, request: &CompletionRequest) -> ChatCompletionRequest {
        let mut messages = Vec::new();

        // System prompt goes first so later history cannot shadow it
        if let Some(ref prompt) = request.system_prompt {
            messages.push(WireMessage {
                role: "system".to_string(),
                content: Some(MessageContent::Text(prompt.clone())),
                tool_calls: None,
                tool_call_id: None,
            });
        }

        for message in &request.messages {
            messages.push(to_wire_message(message));
        }

        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: request.temperature,
            tools: request
                .tools
                .iter()
                .map(|definition| definition.to_openai_format())
                .collect(),
        }
    }

    /// Sends a request and handles transport-level failures.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let wire_request = self.to_wire_request(request);

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(AIError::AuthenticationFailed),
            429 => {
                let retry_after = Self::parse_retry_after(&error_body);
                Err(AIError::rate_limited(retry_after))
            }
            400 => Err(AIError::InvalidRequest(error_body)),
            500..=599 => Err(AIError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AIError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses retry-after from error response.
    fn parse_retry_after(error_body: &str) -> u32 {
        // OpenAI includes retry-after in the error message sometimes
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(msg) = parsed.get("error").and_then(|e| e.get("message")) {
                if let Some(s) = msg.as_str() {
                    // Try to find "try again in Xs" pattern
                    if let Some(idx) = s.find("try again in ") {
                        let rest = &s[idx + 13..];
                        if let Some(num_end) = rest.find(|c: char| !c.is_ascii_digit()) {
                            if let Ok(secs) = rest[..num_end].parse::<u32>() {
                                return secs;
                            }
                        }
                    }
                }
            }
        }
        30 // Default retry after
    }

    /// Parses a non-streaming response into a completion.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let response = self.handle_response_status(response).await?;

        let wire_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = wire_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AIError::parse("No choices in response"))?;

        Ok(CompletionResponse {
            message: from_wire_message(choice.message),
            model: wire_response.model,
            finish_reason: map_finish_reason(choice.finish_reason.as_deref()),
        })
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }
}

/// Converts a domain message to the wire format.
///
/// Assistant messages that carry tool calls with no text send `content` as
/// absent rather than an empty string, which is what the API expects.
fn to_wire_message(message: &Message) -> WireMessage {
    let tool_calls = if message.tool_calls().is_empty() {
        None
    } else {
        Some(
            message
                .tool_calls()
                .iter()
                .map(|call| WireToolCall {
                    id: call.id().to_string(),
                    call_type: "function".to_string(),
                    function: WireFunctionCall {
                        name: call.name().to_string(),
                        arguments: call.arguments().to_string(),
                    },
                })
                .collect(),
        )
    };

    let text = message.display_text();
    let content = if text.is_empty() && tool_calls.is_some() {
        None
    } else {
        Some(message.content().clone())
    };

    WireMessage {
        role: message.role().as_str().to_string(),
        content,
        tool_calls,
        tool_call_id: message.tool_call_id().map(str::to_string),
    }
}

/// Converts a response message back to the domain representation.
fn from_wire_message(message: WireMessage) -> Message {
    let invocations: Vec<ToolInvocation> = message
        .tool_calls
        .unwrap_or_default()
        .into_iter()
        .map(|call| {
            ToolInvocation::new(
                call.id,
                call.function.name,
                decode_tool_arguments(&call.function.arguments),
            )
        })
        .collect();

    let content = message
        .content
        .unwrap_or(MessageContent::Text(String::new()));

    if invocations.is_empty() {
        Message::assistant(content.to_text())
    } else {
        Message::assistant_with_tools(content, invocations)
    }
}

/// Decodes a JSON-encoded tool argument string.
///
/// Malformed payloads degrade to `Null` instead of failing the whole
/// completion; the tool executor then rejects them with a schema error the
/// model can react to.
fn decode_tool_arguments(raw: &str) -> serde_json::Value {
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "failed to decode tool call arguments");
            serde_json::Value::Null
        }
    }
}

fn map_finish_reason(reason: Option<&str>) -> FinishReason {
    match reason {
        Some("length") => FinishReason::Length,
        Some("tool_calls") => FinishReason::ToolCalls,
        Some("content_filter") => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    }
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<MessageContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<WireToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireToolCall {
    id: String,
    #[serde(rename = "type")]
    call_type: String,
    function: WireFunctionCall,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireFunctionCall {
    name: String,
    /// JSON-encoded argument object, as delivered by the API.
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    model: String,
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: WireMessage,
    finish_reason: Option<String>,
}
