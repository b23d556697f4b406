//! HTTP adapter for clarification endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChatMessageView, ClarificationMessageRequest, ClarificationMessageResponse,
    ClarificationStartResponse, ErrorResponse, StartClarificationRequest,
};
pub use handlers::{send_clarification_message, start_clarification, ClarificationAppState};
pub use routes::{api_router, clarification_routes};
