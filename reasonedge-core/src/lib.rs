//! # ReasonEdge Core
//!
//! Core abstractions and runtime for ReasonEdge.
//!
//! This crate provides the provider and layer traits, the reasoning
//! strategy registry, the step parser and the [`Reasoner`] that ties them
//! together into a single request/response call.

pub mod error;
pub mod layer;
pub mod provider;
pub mod runtime;
pub mod strategy;
pub mod types;

// Re-exports
pub use error::ReasonError;
pub use layer::{Layer, LayeredProvider};
pub use provider::Provider;
pub use runtime::{Reasoner, ReasonerBuilder};
pub use strategy::{
    extract_steps, final_answer, resolve_strategy, Algorithm, AlgorithmInfo, ChainOfThought,
    ReasoningStrategy,
};
pub use types::*;

/// Result type alias for reasoning operations
pub type Result<T> = std::result::Result<T, ReasonError>;
