//! Timeout layer for the outbound backend call.

use async_trait::async_trait;
use reasonedge_core::error::ReasonError;
use reasonedge_core::layer::{Layer, LayeredProvider};
use reasonedge_core::provider::Provider;
use reasonedge_core::types::*;
use std::time::Duration;

/// Timeout layer configuration
#[derive(Debug, Clone)]
pub struct TimeoutLayer {
    timeout: Duration,
}

impl TimeoutLayer {
    /// Create a new timeout layer
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Configured deadline
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for TimeoutLayer {
    fn default() -> Self {
        Self::new(Duration::from_secs(60))
    }
}

impl<P: Provider> Layer<P> for TimeoutLayer {
    type LayeredProvider = TimeoutProvider<P>;

    fn layer(&self, inner: P) -> Self::LayeredProvider {
        TimeoutProvider {
            inner,
            timeout: self.timeout,
        }
    }
}

/// Provider wrapped with a deadline
#[derive(Debug)]
pub struct TimeoutProvider<P> {
    inner: P,
    timeout: Duration,
}

#[async_trait]
impl<P: Provider> LayeredProvider for TimeoutProvider<P> {
    type Inner = P;

    fn inner(&self) -> &Self::Inner {
        &self.inner
    }

    async fn layered_chat_completion(
        &self,
        req: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ReasonError> {
        match tokio::time::timeout(self.timeout, self.inner.chat_completion(req)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::debug!("chat_completion exceeded {:?}", self.timeout);
                Err(ReasonError::timeout(format!(
                    "no response from {} within {:?}",
                    self.inner.info().name,
                    self.timeout
                )))
            }
        }
    }
}

reasonedge_core::impl_layered_provider!(TimeoutProvider);
