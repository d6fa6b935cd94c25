//! Reasoning strategies.
//!
//! A strategy decides how a prompt is framed for the model and how the
//! model's free text is split back into labeled steps. Strategies are looked
//! up by name through the closed [`Algorithm`] registry.

pub mod chain_of_thought;
pub mod registry;
pub mod steps;

pub use chain_of_thought::ChainOfThought;
pub use registry::{resolve_strategy, Algorithm, AlgorithmInfo};
pub use steps::{extract_steps, final_answer};

use crate::types::{HistoryMessage, Message};
use std::fmt::Debug;

/// Strategy for prompting a model and parsing its output.
pub trait ReasoningStrategy: Send + Sync + Debug {
    /// Registered name of the strategy
    fn name(&self) -> &str;

    /// Fixed instruction prepended to every conversation
    fn system_prompt(&self) -> &str;

    /// Split raw model output into ordered steps
    fn extract_steps(&self, raw_response: &str) -> Vec<String>;

    /// Pick the final answer from the extracted steps.
    fn final_answer(&self, steps: &[String], raw_response: &str) -> String {
        final_answer(steps, raw_response)
    }

    /// Build the outbound conversation: preamble, history, then the prompt.
    fn build_messages(&self, prompt: &str, history: Option<&[HistoryMessage]>) -> Vec<Message> {
        let mut messages = Vec::with_capacity(2 + history.map_or(0, <[_]>::len));
        messages.push(Message::system(self.system_prompt()));
        if let Some(history) = history {
            messages.extend(history.iter().cloned().map(Message::from));
        }
        messages.push(Message::user(prompt));
        messages
    }
}
