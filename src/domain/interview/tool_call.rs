//! Tool invocation value object and the closed set of recognized tools.

use serde::{Deserialize, Serialize};

/// A tool invocation requested by the model in an assistant turn.
///
/// Arguments are stored as decoded JSON. Providers that deliver arguments as
/// an encoded string decode them at the adapter boundary, so domain code
/// never sees wire encoding details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// Provider-assigned identifier, echoed back by the tool reply.
    id: String,

    /// Name of the requested tool.
    name: String,

    /// Decoded invocation arguments.
    arguments: serde_json::Value,
}

impl ToolInvocation {
    /// Creates a new tool invocation.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: serde_json::Value,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &serde_json::Value {
        &self.arguments
    }

    /// Maps this invocation's name onto the closed tool set, if recognized.
    pub fn known_tool(&self) -> Option<KnownTool> {
        KnownTool::from_name(&self.name)
    }
}

/// The closed set of tools this service offers to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownTool {
    /// Read, write, or append interview JSON documents.
    ManageInterviewJson,
    /// Deliver the finalized interview script to the application.
    EmitInterviewScript,
}

impl KnownTool {
    pub const MANAGE_INTERVIEW_JSON: &'static str = "manage_interview_json";
    pub const EMIT_INTERVIEW_SCRIPT: &'static str = "emit_interview_script";

    /// Resolves a wire-level tool name. Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            Self::MANAGE_INTERVIEW_JSON => Some(KnownTool::ManageInterviewJson),
            Self::EMIT_INTERVIEW_SCRIPT => Some(KnownTool::EmitInterviewScript),
            _ => None,
        }
    }

    /// Returns the wire name of this tool.
    pub fn name(&self) -> &'static str {
        match self {
            KnownTool::ManageInterviewJson => Self::MANAGE_INTERVIEW_JSON,
            KnownTool::EmitInterviewScript => Self::EMIT_INTERVIEW_SCRIPT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invocation_preserves_fields() {
        let invocation = ToolInvocation::new(
            "call_1",
            "manage_interview_json",
            json!({ "action": "read", "file_name": "notes" }),
        );

        assert_eq!(invocation.id(), "call_1");
        assert_eq!(invocation.name(), "manage_interview_json");
        assert_eq!(invocation.arguments()["action"], "read");
    }

    #[test]
    fn known_tool_resolves_recognized_names() {
        assert_eq!(
            KnownTool::from_name("manage_interview_json"),
            Some(KnownTool::ManageInterviewJson)
        );
        assert_eq!(
            KnownTool::from_name("emit_interview_script"),
            Some(KnownTool::EmitInterviewScript)
        );
    }

    #[test]
    fn known_tool_rejects_unrecognized_names() {
        assert_eq!(KnownTool::from_name("delete_everything"), None);
        assert_eq!(KnownTool::from_name(""), None);
    }

    #[test]
    fn known_tool_names_round_trip() {
        for tool in [KnownTool::ManageInterviewJson, KnownTool::EmitInterviewScript] {
            assert_eq!(KnownTool::from_name(tool.name()), Some(tool));
        }
    }

    #[test]
    fn invocation_with_null_arguments_is_representable() {
        let invocation =
            ToolInvocation::new("call_2", "emit_interview_script", serde_json::Value::Null);
        assert!(invocation.arguments().is_null());
        assert_eq!(invocation.known_tool(), Some(KnownTool::EmitInterviewScript));
    }
}
