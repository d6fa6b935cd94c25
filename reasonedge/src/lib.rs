//! # ReasonEdge
//!
//! Forward prompts to a hosted language model and get back a structured
//! reasoning record: the raw response, the labeled steps extracted from it,
//! the final answer and timing metadata.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! reasonedge = { version = "0.1", features = ["openai", "layers"] }
//! ```
//!
//! ```ignore
//! use reasonedge::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OpenAiProvider::builder()
//!     .api_key("your-api-key")
//!     .build()?;
//!
//! let reasoner = Reasoner::builder(provider, "gpt-4o")
//!     .layer(TimeoutLayer::new(Duration::from_secs(60)))
//!     .layer(LoggingLayer::new())
//!     .finish();
//!
//! let result = reasoner
//!     .reason(ReasoningRequest::new("What is 17 * 23?").with_temperature(0.2))
//!     .await?;
//!
//! for step in &result.reasoning_steps {
//!     println!("{step}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: `openai` and `layers`
//! - `openai`: OpenAI / Azure OpenAI / DeepSeek provider
//! - `providers`: All available providers
//! - `layers`: Built-in layers (logging, timeout)
//! - `client`: HTTP client for a running ReasonEdge service
//! - `full`: All features enabled

// Re-export core types and traits
pub use reasonedge_core::*;

// Re-export providers under `provider` module
#[cfg(feature = "reasonedge-provider")]
pub mod provider {
    //! Language-model provider implementations.
    pub use reasonedge_provider::*;
}

// Re-export layers under `layer` module
#[cfg(feature = "reasonedge-layer")]
pub mod layer {
    //! Built-in provider layers.
    pub use reasonedge_layer::*;
}

// Re-export the service client under `client` module
#[cfg(feature = "reasonedge-client")]
pub mod client {
    //! HTTP client for a running ReasonEdge service.
    pub use reasonedge_client::*;
}

/// Prelude module for convenient imports
pub mod prelude {
    //! Prelude module containing the most commonly used types and traits.
    //!
    //! ```
    //! use reasonedge::prelude::*;
    //! ```

    pub use crate::{
        Algorithm, Layer, Message, Provider, ReasonError, Reasoner, ReasoningRequest,
        ReasoningResult, ReasoningStrategy, Result, Role,
    };

    #[cfg(feature = "reasonedge-provider")]
    pub use crate::provider::*;

    #[cfg(feature = "reasonedge-layer")]
    pub use crate::layer::*;

    #[cfg(feature = "reasonedge-client")]
    pub use crate::client::*;
}
