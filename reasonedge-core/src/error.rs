//! Error types for ReasonEdge operations.

/// The main error type for reasoning operations.
#[derive(Debug, thiserror::Error)]
pub enum ReasonError {
    /// Provider-specific errors
    #[error("Provider error: {0}")]
    Provider(String),

    /// Network-related errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid request errors
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The requested reasoning algorithm is not registered
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Timeout errors
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors
    #[error("Error: {0}")]
    Other(String),
}

impl ReasonError {
    /// Create a provider error
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create an unsupported algorithm error carrying the rejected name
    pub fn unsupported_algorithm(name: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm(name.into())
    }

    /// Create a timeout error
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Whether the error was caused by the caller's input.
    ///
    /// Client errors carry the offending value in their message and are safe
    /// to echo back. Everything else is reported to callers as an opaque
    /// server failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ReasonError::InvalidRequest(_) | ReasonError::UnsupportedAlgorithm(_)
        )
    }
}
