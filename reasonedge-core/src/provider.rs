//! Provider trait and core abstractions.

use crate::error::ReasonError;
use crate::types::*;
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

/// Core provider trait for language-model backends.
///
/// A provider only has to answer a single chat completion. Prompt
/// augmentation, step extraction and result formatting all live in the
/// [`Reasoner`](crate::runtime::Reasoner), so a provider never sees
/// reasoning-specific types.
#[async_trait]
pub trait Provider: Send + Sync + Debug + 'static {
    /// Get provider information
    fn info(&self) -> Arc<ProviderInfo>;

    /// Chat completion (non-streaming)
    async fn chat_completion(
        &self,
        req: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ReasonError>;
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for Arc<P> {
    fn info(&self) -> Arc<ProviderInfo> {
        (**self).info()
    }

    async fn chat_completion(
        &self,
        req: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ReasonError> {
        (**self).chat_completion(req).await
    }
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for Box<P> {
    fn info(&self) -> Arc<ProviderInfo> {
        (**self).info()
    }

    async fn chat_completion(
        &self,
        req: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ReasonError> {
        (**self).chat_completion(req).await
    }
}
