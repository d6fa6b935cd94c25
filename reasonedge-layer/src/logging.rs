//! Logging layer for backend calls.
//!
//! Every line carries the reasoning request id set by the `Reasoner`, so the
//! outbound call can be matched with the request that triggered it.

use async_trait::async_trait;
use reasonedge_core::error::ReasonError;
use reasonedge_core::layer::{Layer, LayeredProvider};
use reasonedge_core::provider::Provider;
use reasonedge_core::types::*;
use std::time::Instant;

/// Logging layer that records each backend call of a reasoning request.
#[derive(Debug, Clone)]
pub struct LoggingLayer {
    prefix: String,
}

impl LoggingLayer {
    /// Create a new logging layer
    pub fn new() -> Self {
        Self::with_prefix("[ReasonEdge]")
    }

    /// Create a logging layer with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for LoggingLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Provider> Layer<P> for LoggingLayer {
    type LayeredProvider = LoggingProvider<P>;

    fn layer(&self, inner: P) -> Self::LayeredProvider {
        LoggingProvider {
            inner,
            prefix: self.prefix.clone(),
        }
    }
}

/// Provider wrapped with logging
#[derive(Debug)]
pub struct LoggingProvider<P> {
    inner: P,
    prefix: String,
}

/// Shape of the outbound prompt: preamble present, prior turns, prompt size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PromptSummary {
    pub has_preamble: bool,
    pub history_turns: usize,
    pub prompt_chars: usize,
}

impl PromptSummary {
    pub(crate) fn of(req: &ChatCompletionRequest) -> Self {
        let has_preamble = req
            .messages
            .first()
            .is_some_and(|msg| msg.role == Role::System);
        let prompt = req.messages.last().filter(|msg| msg.role == Role::User);
        let prompt_chars = prompt.map_or(0, |msg| msg.text().chars().count());
        // Everything between the preamble and the final user prompt.
        let history_turns = req
            .messages
            .len()
            .saturating_sub(usize::from(has_preamble) + usize::from(prompt.is_some()));

        Self {
            has_preamble,
            history_turns,
            prompt_chars,
        }
    }
}

/// What came back: how long the reply is and how many lines carry a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReplySummary {
    pub reply_chars: usize,
    pub labeled_lines: usize,
    pub truncated: bool,
}

impl ReplySummary {
    pub(crate) fn of(response: &ChatCompletionResponse) -> Self {
        let Some(choice) = response.choices.first() else {
            return Self {
                reply_chars: 0,
                labeled_lines: 0,
                truncated: false,
            };
        };
        let text = choice.message.text();
        let labeled_lines = text
            .lines()
            .map(|line| line.trim_start_matches(['-', '*', '•', ' ']).to_ascii_lowercase())
            .filter(|line| line.starts_with("step") || line.starts_with("answer:"))
            .count();

        Self {
            reply_chars: text.chars().count(),
            labeled_lines,
            truncated: choice.finish_reason == FinishReason::Length,
        }
    }
}

#[async_trait]
impl<P: Provider> LayeredProvider for LoggingProvider<P> {
    type Inner = P;

    fn inner(&self) -> &Self::Inner {
        &self.inner
    }

    async fn layered_chat_completion(
        &self,
        req: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ReasonError> {
        let request_id = req.request_id.clone().unwrap_or_else(|| "-".to_string());
        let prompt = PromptSummary::of(&req);
        tracing::debug!(
            request_id = %request_id,
            provider = %self.inner.info().id,
            model = %req.model,
            temperature = ?req.temperature,
            preamble = prompt.has_preamble,
            history_turns = prompt.history_turns,
            prompt_chars = prompt.prompt_chars,
            "{} sending reasoning prompt",
            self.prefix
        );

        let start = Instant::now();
        let result = self.inner.chat_completion(req).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(response) => {
                let reply = ReplySummary::of(response);
                if reply.truncated {
                    tracing::warn!(
                        request_id = %request_id,
                        "{} reply cut off at the token limit; later steps may be missing",
                        self.prefix
                    );
                }
                tracing::debug!(
                    request_id = %request_id,
                    response_id = %response.id,
                    reply_chars = reply.reply_chars,
                    labeled_lines = reply.labeled_lines,
                    tokens = response.usage.total_tokens,
                    elapsed = ?elapsed,
                    "{} reasoning reply received",
                    self.prefix
                );
            }
            Err(e) => {
                tracing::error!(
                    request_id = %request_id,
                    elapsed = ?elapsed,
                    "{} backend call failed: {}",
                    self.prefix,
                    e
                );
            }
        }

        result
    }
}

reasonedge_core::impl_layered_provider!(LoggingProvider);
