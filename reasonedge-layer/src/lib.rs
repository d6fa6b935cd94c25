//! # ReasonEdge Layers
//!
//! Built-in layers for ReasonEdge providers.
//!
//! Currently implemented layers:
//! - `LoggingLayer`: Logs every backend call with timing information
//! - `TimeoutLayer`: Fails a backend call that outlives its deadline
//!
//! ## Usage
//!
//! ```ignore
//! use reasonedge_core::Reasoner;
//! use reasonedge_layer::{LoggingLayer, TimeoutLayer};
//!
//! let reasoner = Reasoner::builder(provider, "gpt-4o")
//!     .layer(TimeoutLayer::new(Duration::from_secs(60)))
//!     .layer(LoggingLayer::new())
//!     .finish();
//! ```

pub mod logging;
pub mod timeout;

// Re-exports
pub use logging::LoggingLayer;
pub use timeout::TimeoutLayer;

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use reasonedge_core::error::ReasonError;
    use reasonedge_core::provider::Provider;
    use reasonedge_core::types::*;
    use std::sync::Arc;
    use std::time::Duration;

    /// Provider that answers after a fixed delay, or fails.
    #[derive(Debug)]
    pub struct SlowProvider {
        pub delay: Duration,
        pub fail: bool,
    }

    #[async_trait]
    impl Provider for SlowProvider {
        fn info(&self) -> Arc<ProviderInfo> {
            Arc::new(ProviderInfo {
                id: "slow".to_string(),
                name: "Slow".to_string(),
            })
        }

        async fn chat_completion(
            &self,
            req: ChatCompletionRequest,
        ) -> Result<ChatCompletionResponse, ReasonError> {
            tokio::time::sleep(self.delay).await;
            if self.fail {
                return Err(ReasonError::provider("backend unavailable"));
            }
            Ok(ChatCompletionResponse {
                id: "resp-1".to_string(),
                model: req.model,
                choices: vec![Choice {
                    index: 0,
                    message: Message::assistant("Answer: done"),
                    finish_reason: FinishReason::Stop,
                }],
                usage: Usage {
                    prompt_tokens: 3,
                    completion_tokens: 2,
                    total_tokens: 5,
                },
                created: None,
            })
        }
    }

    pub fn request() -> ChatCompletionRequest {
        ChatCompletionRequest::new("test-model", vec![Message::user("hi")])
    }
}
