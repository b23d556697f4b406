//! Unconfigured Provider - stand-in wired when no API credential is set.
//!
//! Lets the service boot and serve its HTTP surface without a credential;
//! any completion attempt fails with [`AIError::NotConfigured`], which the
//! HTTP layer translates into a configuration error response.

use async_trait::async_trait;

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse};

/// Provider used when no AI credential is configured.
#[derive(Debug, Default, Clone)]
pub struct UnconfiguredProvider;

impl UnconfiguredProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AIProvider for UnconfiguredProvider {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        Err(AIError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interview::Message;

    #[tokio::test]
    async fn every_completion_fails_with_not_configured() {
        let provider = UnconfiguredProvider::new();
        let request = CompletionRequest::new(vec![Message::user("hello")]);

        let err = provider.complete(request).await.unwrap_err();

        assert!(matches!(err, AIError::NotConfigured));
    }
}
