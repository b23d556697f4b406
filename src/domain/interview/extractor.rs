//! Script extraction - pulls a validated script out of new history entries.

use tracing::warn;

use super::message::{Message, Role};
use super::script::InterviewScript;
use super::tool_call::KnownTool;

/// Scans the slice of `history` starting at `start_index` for a script
/// emission, returning the first payload that passes shape validation.
///
/// Only assistant entries are inspected, and only their
/// `emit_interview_script` invocations. Candidates are tried in order;
/// invalid payloads are logged and skipped so a later valid emission in the
/// same turn still wins. Scanning stops at the first valid script.
pub fn extract_script(history: &[Message], start_index: usize) -> Option<InterviewScript> {
    for message in history.iter().skip(start_index) {
        if message.role() != Role::Assistant {
            continue;
        }

        for invocation in message.tool_calls() {
            if invocation.known_tool() != Some(KnownTool::EmitInterviewScript) {
                continue;
            }

            let payload = match invocation.arguments().get("script") {
                Some(value) if !value.is_null() => value,
                _ => continue,
            };

            match InterviewScript::validate_payload(payload) {
                Ok(script) => return Some(script),
                Err(err) => {
                    warn!(error = %err, "discarding invalid interview script payload");
                }
            }
        }
    }

    None
}
