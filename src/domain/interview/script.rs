//! Interview script artifact - the deliverable of a clarification session.
//!
//! Scripts arrive as JSON payloads on `emit_interview_script` tool calls and
//! are accepted only after shape validation. Validation checks structure, not
//! content quality: the question-count guideline in the agent prompt is
//! deliberately unenforced here so a usable four-question script is not
//! discarded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Required value of the script's `type` tag.
pub const INTERVIEW_SCRIPT_TYPE: &str = "interview_script";

/// One question in an interview script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    /// The question to ask the participant.
    pub question: String,

    /// What the researcher hopes to learn from it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

/// A validated interview script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewScript {
    /// Discriminator tag, always [`INTERVIEW_SCRIPT_TYPE`].
    #[serde(rename = "type")]
    pub script_type: String,

    /// Opening the interviewer reads to the participant.
    pub introduction: String,

    /// Ordered questions to ask.
    pub questions: Vec<InterviewQuestion>,

    /// Optional closing statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing: Option<String>,

    /// Optional reminders for the interviewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Vec<String>>,
}

/// Reasons a script payload fails shape validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptValidationError {
    #[error("payload is not an interview script object: {0}")]
    MalformedPayload(String),

    #[error("type tag must be \"interview_script\", got \"{0}\"")]
    WrongTypeTag(String),

    #[error("introduction cannot be empty")]
    EmptyIntroduction,

    #[error("script must contain at least one question")]
    NoQuestions,
}

impl InterviewScript {
    /// Validates a raw JSON payload and returns the typed script.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptValidationError`] when the payload is not an object of
    /// the expected shape, carries the wrong `type` tag, has a blank
    /// introduction, or contains no questions.
    pub fn validate_payload(payload: &serde_json::Value) -> Result<Self, ScriptValidationError> {
        let script: InterviewScript = serde_json::from_value(payload.clone())
            .map_err(|e| ScriptValidationError::MalformedPayload(e.to_string()))?;

        if script.script_type != INTERVIEW_SCRIPT_TYPE {
            return Err(ScriptValidationError::WrongTypeTag(script.script_type));
        }
        if script.introduction.trim().is_empty() {
            return Err(ScriptValidationError::EmptyIntroduction);
        }
        if script.questions.is_empty() {
            return Err(ScriptValidationError::NoQuestions);
        }

        Ok(script)
    }

    /// Returns the number of questions in the script.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
