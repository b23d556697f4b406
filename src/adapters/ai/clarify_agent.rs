//! Clarify Agent - tool-dispatching reasoning loop over an AI provider.
//!
//! Each `invoke` runs completion rounds until the model answers without
//! requesting tools. Tool invocations are executed between rounds and their
//! replies appended to the history, so the model sees every outcome on the
//! next round. Tool failures become error replies rather than aborting the
//! pass; the round limit guards against dispatch loops that never settle.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::domain::interview::Message;
use crate::ports::{
    AIProvider, AgentError, CompletionRequest, ConversationAgent, ToolExecutor,
};

/// System prompt governing the clarification workflow.
pub const CLARIFY_SCOPE_PROMPT: &str = r#"You are ClarifyScope, an AI facilitator helping researchers prepare interview scripts for the AI Interview Assistant hackathon project.

Follow this workflow precisely:
1. When the researcher shares their goal, greet them and restate it exactly with the heading `User research goal:` on the first line. Preserve any metadata lines such as `Target Audience:` or `Duration:` and interpret them literally (the duration refers to interview length).
2. Ask up to three targeted follow-up questions or refinements and wait for their responses. Continue clarifying until you can draft a scope.
3. Present a refined scope using the heading `Refined Scope:` followed by clear bullet points covering objectives, target participants, key questions to answer, and guardrails.
4. Immediately after presenting the refined scope, ask the researcher what success or “done” looks like for this initiative. Wait for their answer and incorporate it into your understanding.
5. Offer 2–3 concise next-step suggestions (e.g., research logistics, stakeholder alignment) tailored to the scope and the success criteria the researcher provided. Confirm that they are satisfied with the scope and suggestions and ask whether they are ready for interview questions.
6. Only after the researcher explicitly confirms readiness (e.g., “yes”, “looks good”, “go ahead”) should you generate the interview script. When you reach this point, call the `emit_interview_script` tool with the finalized script payload instead of writing it directly into your reply.
7. Once the script is ready, ask whether they would like you to read, write, append, or edit a JSON file in the `output_files` directory. Only call a file-management tool after they explicitly request the action and confirm the file name you should use.

Rules for the final script:
- Provide exactly one introduction and 5 to 8 open-ended interview questions tailored to the clarified scope. Each question must include an `intent` describing what insight it unlocks.
- Include a concise closing statement and optional interviewer reminders if they are important.
- Populate the structured response with the interview script data instead of sending a JSON code block or additional commentary. The live chat reply can include a short acknowledgment, but the structured response must contain the complete script payload.

During earlier turns, respond conversationally, keep replies under 200 words, avoid repeating questions, and probe for missing details when needed. If the researcher indicates the summary is incorrect, return to clarification before seeking confirmation again."#;

const DEFAULT_TEMPERATURE: f32 = 0.2;
const DEFAULT_MAX_ROUNDS: u32 = 8;

/// Reasoning agent that drives the clarification dialogue.
pub struct ClarifyAgent {
    provider: Arc<dyn AIProvider>,
    tools: Arc<dyn ToolExecutor>,
    system_prompt: String,
    temperature: f32,
    max_rounds: u32,
}

impl ClarifyAgent {
    /// Creates an agent with the default prompt, temperature, and round limit.
    pub fn new(provider: Arc<dyn AIProvider>, tools: Arc<dyn ToolExecutor>) -> Self {
        Self {
            provider,
            tools,
            system_prompt: CLARIFY_SCOPE_PROMPT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Overrides the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Overrides the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Overrides the tool dispatch round limit.
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

#[async_trait]
impl ConversationAgent for ClarifyAgent {
    async fn invoke(&self, mut history: Vec<Message>) -> Result<Vec<Message>, AgentError> {
        let definitions = self.tools.definitions();

        for _round in 0..self.max_rounds {
            // 1. Run one completion round over the full history
            let request = CompletionRequest::new(history.clone())
                .with_system_prompt(self.system_prompt.clone())
                .with_temperature(self.temperature)
                .with_tools(definitions.clone());

            let response = self.provider.complete(request).await?;
            let invocations = response.message.tool_calls().to_vec();
            history.push(response.message);

            // 2. A turn without tool requests ends the pass
            if invocations.is_empty() {
                return Ok(history);
            }

            // 3. Execute every requested tool and append its reply.
            //    Failures are reported back to the model instead of aborting,
            //    so it can correct its arguments on the next round.
            for invocation in &invocations {
                let reply = match self.tools.execute(invocation).await {
                    Ok(reply) => reply,
                    Err(err) => {
                        warn!(tool = invocation.name(), error = %err, "tool execution failed");
                        format!("Error: {}", err)
                    }
                };
                history.push(Message::tool(invocation.id(), reply));
            }
        }

        Err(AgentError::RoundLimitExceeded {
            max_rounds: self.max_rounds,
        })
    }
}
