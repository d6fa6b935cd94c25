//! Reasoner implementation.

use crate::error::ReasonError;
use crate::layer::Layer;
use crate::provider::Provider;
use crate::strategy::resolve_strategy;
use crate::types::*;
use std::sync::Arc;
use std::time::Instant;

/// Type-erased provider that can be shared across threads
type BoxedProvider = Arc<dyn Provider>;

/// Builder for composing a provider with layers into a [`Reasoner`].
///
/// Layers wrap the provider with static dispatch while building; the
/// finished reasoner erases the provider type once.
///
/// # Example
///
/// ```ignore
/// let reasoner = Reasoner::builder(openai_provider, "gpt-4o")
///     .layer(TimeoutLayer::new(Duration::from_secs(60)))
///     .layer(LoggingLayer::new())
///     .finish();
/// ```
pub struct ReasonerBuilder<P> {
    provider: P,
    model: String,
    max_tokens: Option<u32>,
}

impl<P: Provider> ReasonerBuilder<P> {
    /// Create a new builder with a provider and the model to query
    pub fn new(provider: P, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            max_tokens: None,
        }
    }

    /// Add a layer to wrap the provider
    pub fn layer<L>(self, layer: L) -> ReasonerBuilder<L::LayeredProvider>
    where
        L: Layer<P>,
    {
        ReasonerBuilder {
            provider: layer.layer(self.provider),
            model: self.model,
            max_tokens: self.max_tokens,
        }
    }

    /// Cap the number of generated tokens
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Finish building and create a Reasoner
    pub fn finish(self) -> Reasoner {
        Reasoner {
            provider: Arc::new(self.provider),
            model: self.model,
            max_tokens: self.max_tokens,
        }
    }
}

/// Turns reasoning requests into structured reasoning results.
///
/// Each call makes exactly one backend request and keeps no state between
/// calls, so a single `Reasoner` can be shared behind an `Arc`.
#[derive(Debug)]
pub struct Reasoner {
    provider: BoxedProvider,
    model: String,
    max_tokens: Option<u32>,
}

impl Reasoner {
    /// Create a new builder
    pub fn builder<P: Provider>(provider: P, model: impl Into<String>) -> ReasonerBuilder<P> {
        ReasonerBuilder::new(provider, model)
    }

    /// Get provider information
    pub fn info(&self) -> Arc<ProviderInfo> {
        self.provider.info()
    }

    /// Model every request is sent to
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one reasoning request.
    ///
    /// Parameters and the algorithm name are checked before the provider is
    /// contacted; both failures are client errors.
    pub async fn reason(&self, request: ReasoningRequest) -> Result<ReasoningResult, ReasonError> {
        let start = Instant::now();

        request.validate()?;
        let strategy = resolve_strategy(&request.algorithm)?;

        let ctx = RequestContext::new(self.provider.info().id.clone(), self.model.clone());
        tracing::debug!(
            request_id = %ctx.request_id,
            provider = %ctx.provider_id,
            model = %ctx.model,
            algorithm = strategy.name(),
            prompt_len = request.prompt.len(),
            "reasoning request"
        );

        let messages = strategy.build_messages(&request.prompt, request.messages.as_deref());
        let mut chat_req = ChatCompletionRequest::new(self.model.clone(), messages)
            .with_temperature(request.backend_temperature())
            .with_request_id(ctx.request_id.clone());
        chat_req.max_tokens = self.max_tokens;

        let response = self.provider.chat_completion(chat_req).await?;
        let raw_response = response.first_text()?;

        let steps = strategy.extract_steps(&raw_response);
        let final_answer = strategy.final_answer(&steps, &raw_response);

        tracing::debug!(
            request_id = %ctx.request_id,
            steps = steps.len(),
            elapsed = ?start.elapsed(),
            "reasoning complete"
        );

        Ok(ReasoningResult::format(
            raw_response,
            steps,
            final_answer,
            start.elapsed(),
            ResultMetadata {
                model_name: self.model.clone(),
                temperature: request.temperature,
            },
        ))
    }
}
