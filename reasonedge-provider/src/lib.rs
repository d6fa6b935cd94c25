//! # ReasonEdge Providers
//!
//! Language-model backends for the reasoner.

pub mod openai;

// Re-exports
pub use openai::{AzureBuilder, OpenAiBuilder, OpenAiProvider};

use reasonedge_core::error::ReasonError;

/// Create a DeepSeek provider (OpenAI-compatible)
///
/// DeepSeek speaks the OpenAI protocol on a different endpoint.
///
/// # Example
///
/// ```ignore
/// use reasonedge_provider::deepseek;
///
/// let provider = deepseek("your-api-key")?;
/// ```
pub fn deepseek(api_key: impl Into<String>) -> Result<OpenAiProvider, ReasonError> {
    OpenAiProvider::builder()
        .api_key(api_key)
        .api_base("https://api.deepseek.com/v1")
        .build_with_id("deepseek", "DeepSeek")
}
