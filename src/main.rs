//! ClarifyScope backend server binary.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clarify_scope::adapters::ai::{
    ClarifyAgent, OpenAIConfig, OpenAIProvider, UnconfiguredProvider,
};
use clarify_scope::adapters::document::LocalJsonDocumentStore;
use clarify_scope::adapters::http::{api_router, cors_layer, ClarificationAppState};
use clarify_scope::adapters::storage::InMemoryConversationStore;
use clarify_scope::adapters::tools::InterviewToolkit;
use clarify_scope::application::handlers::{
    SendClarificationMessageHandler, StartClarificationHandler,
};
use clarify_scope::config::{AiConfig, AppConfig};
use clarify_scope::ports::AIProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    if !config.ai.has_openai() {
        warn!("OPENAI_API_KEY is not configured. Clarification requests will be rejected until it is set.");
    }

    let documents = Arc::new(LocalJsonDocumentStore::new(&config.storage.output_dir)?);
    let toolkit = Arc::new(InterviewToolkit::new(documents));
    let provider = build_provider(&config.ai);
    let agent = Arc::new(
        ClarifyAgent::new(provider, toolkit)
            .with_temperature(config.ai.temperature)
            .with_max_rounds(config.ai.max_tool_rounds),
    );
    let sessions = Arc::new(InMemoryConversationStore::new());

    let state = ClarificationAppState::new(
        Arc::new(StartClarificationHandler::new(
            sessions.clone(),
            agent.clone(),
        )),
        Arc::new(SendClarificationMessageHandler::new(sessions, agent)),
    );

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server.cors_origins_list()));

    let addr = config.server.socket_addr();
    info!(%addr, model = %config.ai.model, "clarify-scope backend listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the configured filter. Production gets JSON output,
/// everything else gets pretty terminal output.
fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_target(false))
            .init();
    }
}

/// Builds the chat provider, or a stub that rejects every call until an API
/// key is configured.
fn build_provider(ai: &AiConfig) -> Arc<dyn AIProvider> {
    match &ai.openai_api_key {
        Some(key) if !key.is_empty() => {
            let config = OpenAIConfig::new(key.clone())
                .with_model(ai.model.clone())
                .with_base_url(ai.base_url.clone())
                .with_timeout(ai.timeout());
            Arc::new(OpenAIProvider::new(config))
        }
        _ => Arc::new(UnconfiguredProvider::new()),
    }
}
