//! Runtime layer for ReasonEdge.
//!
//! The runtime sits between callers holding a [`ReasoningRequest`] and the
//! low-level provider interface (chat_completion). It is responsible for:
//! - Validating request parameters before any backend call
//! - Resolving the reasoning strategy by name
//! - Building the augmented conversation and issuing the single outbound call
//! - Parsing the output and formatting the result record
//!
//! [`ReasoningRequest`]: crate::types::ReasoningRequest

pub mod reasoner;

pub use reasoner::{Reasoner, ReasonerBuilder};
