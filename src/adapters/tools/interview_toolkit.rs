//! Interview toolkit - executor for the two tools offered to the model.
//!
//! `manage_interview_json` exposes sandboxed JSON document management so the
//! model can persist scripts on request. `emit_interview_script` is the
//! delivery channel for the finished script; its reply only acknowledges
//! receipt, the payload itself is lifted out of the transcript afterwards.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::interview::{KnownTool, ToolDefinition, ToolInvocation};
use crate::ports::{
    AppendOutcome, DocumentStore, DocumentStoreError, ReadOutcome, ToolExecutionError, ToolExecutor,
};

/// Arguments accepted by `manage_interview_json`.
///
/// `action` stays a plain string so unsupported values produce the
/// caller-facing reply instead of a deserialization error.
#[derive(Debug, Deserialize)]
struct ManageJsonArgs {
    action: String,
    file_name: String,
    #[serde(default)]
    content: Option<Value>,
}

/// Executes the interview tools against a [`DocumentStore`].
pub struct InterviewToolkit {
    documents: Arc<dyn DocumentStore>,
}

impl InterviewToolkit {
    pub fn new(documents: Arc<dyn DocumentStore>) -> Self {
        Self { documents }
    }

    async fn manage_json(&self, arguments: &Value) -> Result<String, ToolExecutionError> {
        let args: ManageJsonArgs = serde_json::from_value(arguments.clone())
            .map_err(|err| ToolExecutionError::InvalidArguments(err.to_string()))?;

        if args.action == "read" {
            return match self.documents.read(&args.file_name).await? {
                ReadOutcome::Found { value, .. } => serde_json::to_string_pretty(&value)
                    .map_err(|err| DocumentStoreError::Serialization(err.to_string()).into()),
                ReadOutcome::Missing { file_name } => {
                    Ok(format!("No file named {} exists yet.", file_name))
                }
            };
        }

        if args.action != "write" && args.action != "append" {
            return Err(ToolExecutionError::UnsupportedAction);
        }

        let content = args.content.ok_or(ToolExecutionError::ContentRequired)?;

        if args.action == "write" {
            let file_name = self.documents.write(&args.file_name, &content).await?;
            return Ok(format!("Saved interview data to {}.", file_name));
        }

        let AppendOutcome { file_name, created } =
            self.documents.append(&args.file_name, &content).await?;
        if created {
            Ok(format!("Saved interview data to {}.", file_name))
        } else {
            Ok(format!("Appended interview data to {}.", file_name))
        }
    }

    fn emit_script(&self, arguments: &Value) -> Result<String, ToolExecutionError> {
        match arguments.get("script") {
            Some(script) if !script.is_null() => Ok("Interview script received.".to_string()),
            _ => Err(ToolExecutionError::InvalidArguments(
                "missing required argument: script".to_string(),
            )),
        }
    }
}

#[async_trait]
impl ToolExecutor for InterviewToolkit {
    async fn execute(&self, invocation: &ToolInvocation) -> Result<String, ToolExecutionError> {
        match invocation.known_tool() {
            Some(KnownTool::ManageInterviewJson) => self.manage_json(invocation.arguments()).await,
            Some(KnownTool::EmitInterviewScript) => self.emit_script(invocation.arguments()),
            None => Err(ToolExecutionError::UnknownTool(
                invocation.name().to_string(),
            )),
        }
    }

    fn definitions(&self) -> Vec<ToolDefinition> {
        vec![
            manage_interview_json_definition(),
            emit_interview_script_definition(),
        ]
    }
}

/// Definition of the JSON document management tool.
pub fn manage_interview_json_definition() -> ToolDefinition {
    ToolDefinition::new(
        KnownTool::MANAGE_INTERVIEW_JSON,
        "Read, write, or append interview scripts in JSON files stored under output_files.",
        json!({
            "type": "object",
            "properties": {
                "action": {
                    "type": "string",
                    "enum": ["read", "write", "append"],
                    "description": "Operation to perform on the JSON file"
                },
                "file_name": {
                    "type": "string",
                    "description": "Target filename inside output_files, e.g., research-session.json"
                },
                "content": {
                    "description": "JSON-compatible content. Required for write and append operations."
                }
            },
            "required": ["action", "file_name"]
        }),
    )
}

/// Definition of the script delivery tool.
pub fn emit_interview_script_definition() -> ToolDefinition {
    ToolDefinition::new(
        KnownTool::EMIT_INTERVIEW_SCRIPT,
        "Deliver the finalized interview script back to the application.",
        json!({
            "type": "object",
            "properties": {
                "script": {
                    "type": "object",
                    "description": "Structured interview script payload.",
                    "properties": {
                        "type": { "type": "string", "enum": ["interview_script"] },
                        "introduction": { "type": "string" },
                        "questions": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "question": { "type": "string" },
                                    "intent": { "type": "string" }
                                },
                                "required": ["question"]
                            }
                        },
                        "closing": { "type": "string" },
                        "reminders": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["type", "introduction", "questions"]
                }
            },
            "required": ["script"]
        }),
    )
}
