//! Tool definition - schema advertised to the model for each tool.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Definition of a tool the model may invoke.
///
/// The parameter schema is a JSON Schema object describing the arguments the
/// tool accepts. Definitions are advertised on every completion round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Wire name of the tool.
    pub name: String,

    /// Human-readable description shown to the model.
    pub description: String,

    /// JSON Schema for the tool's arguments.
    pub parameters_schema: serde_json::Value,
}

impl ToolDefinition {
    /// Creates a new tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters_schema,
        }
    }

    /// Converts to the OpenAI function-tool wire format.
    pub fn to_openai_format(&self) -> serde_json::Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters_schema,
            }
        })
    }
}
