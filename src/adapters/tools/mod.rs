//! Tool adapters - executors for model-invoked tools.

mod interview_toolkit;

pub use interview_toolkit::{
    emit_interview_script_definition, manage_interview_json_definition, InterviewToolkit,
};
