//! Chain-of-thought prompting.

use super::steps::extract_steps;
use super::ReasoningStrategy;

const SYSTEM_PROMPT: &str = "Let's think step by step.
Each step should be a list item, with \"Step X:\" as the prefix, e.g. \"Step 1: ...\"
After each reasoning step, output a newline character.
When you have finished your reasoning, provide your final answer as a list item, with \"Answer:\" as the prefix, e.g. \"Answer: ...\"
Always think before you answer.";

/// Asks the model to reason in numbered steps and finish with an answer line.
#[derive(Debug, Clone, Default)]
pub struct ChainOfThought;

impl ChainOfThought {
    /// Create a new chain-of-thought strategy
    pub fn new() -> Self {
        Self
    }
}

impl ReasoningStrategy for ChainOfThought {
    fn name(&self) -> &str {
        "chain_of_thought"
    }

    fn system_prompt(&self) -> &str {
        SYSTEM_PROMPT
    }

    fn extract_steps(&self, raw_response: &str) -> Vec<String> {
        extract_steps(raw_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HistoryMessage, Role};

    #[test]
    fn test_build_messages_prepends_preamble() {
        let strategy = ChainOfThought::new();
        let messages = strategy.build_messages("What is 2 + 2?", None);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].text().starts_with("Let's think step by step."));
        assert!(messages[0].text().contains("\"Answer:\""));
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].text(), "What is 2 + 2?");
    }

    #[test]
    fn test_build_messages_places_history_before_prompt() {
        let strategy = ChainOfThought::new();
        let history = vec![
            HistoryMessage {
                role: Role::User,
                content: "Capital of France?".to_string(),
            },
            HistoryMessage {
                role: Role::Assistant,
                content: "Answer: Paris".to_string(),
            },
        ];
        let messages = strategy.build_messages("And Germany?", Some(&history));

        let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );
        assert_eq!(messages[3].text(), "And Germany?");
    }

    #[test]
    fn test_final_answer_falls_back_to_raw() {
        let strategy = ChainOfThought::new();
        let steps = strategy.extract_steps("");
        assert_eq!(strategy.final_answer(&steps, ""), "");

        let raw = "Step 1: add\nAnswer: 4";
        let steps = strategy.extract_steps(raw);
        assert_eq!(strategy.final_answer(&steps, raw), "Answer: 4");
    }
}
