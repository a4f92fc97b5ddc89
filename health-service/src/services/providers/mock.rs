//! Mock provider implementation for testing.

use super::{GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the mock returns on each call.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Succeed with this text body.
    Text(String),
    /// Fail with a network-layer error.
    NetworkError(String),
    /// Fail with a provider-reported error.
    ApiError(String),
}

/// Mock text provider with a call counter, so tests can assert that the
/// network layer was (or was not) reached.
pub struct MockTextProvider {
    reply: MockReply,
    calls: AtomicUsize,
}

impl MockTextProvider {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(MockReply::Text(text.into()))
    }

    pub fn with_network_error(message: impl Into<String>) -> Self {
        Self::new(MockReply::NetworkError(message.into()))
    }

    pub fn with_api_error(message: impl Into<String>) -> Self {
        Self::new(MockReply::ApiError(message.into()))
    }

    /// Number of generate calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.reply {
            MockReply::Text(text) => Ok(ProviderResponse {
                text: Some(text.clone()),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: text.len() as i32 / 4,
            }),
            MockReply::NetworkError(message) => {
                Err(ProviderError::NetworkError(message.clone()))
            }
            MockReply::ApiError(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_counts_calls() {
        let provider = MockTextProvider::with_text("{}");
        assert_eq!(provider.call_count(), 0);

        let params = GenerationParams::default();
        provider.generate("hi", &params).await.unwrap();
        provider.generate("hi again", &params).await.unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_network_error() {
        let provider = MockTextProvider::with_network_error("connection reset");
        let err = provider
            .generate("hi", &GenerationParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NetworkError(_)));
        assert_eq!(provider.call_count(), 1);
    }
}
