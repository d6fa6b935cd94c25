//! Core types for reasoning operations.

use crate::error::ReasonError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default sampling temperature when a request does not specify one.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Name of the algorithm used when a request does not specify one.
pub const DEFAULT_ALGORITHM: &str = "chain_of_thought";

/// Message role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Message content part
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
}

/// Message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

impl Message {
    /// Create a new user message with text
    pub fn user(text: impl Into<String>) -> Self {
        Self::with_role(Role::User, text)
    }

    /// Create a new assistant message with text
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::with_role(Role::Assistant, text)
    }

    /// Create a new system message with text
    pub fn system(text: impl Into<String>) -> Self {
        Self::with_role(Role::System, text)
    }

    fn with_role(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            content: vec![ContentPart::Text { text: text.into() }],
        }
    }

    /// Concatenate all text parts of the message.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(|part| match part {
                ContentPart::Text { text } => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

/// A prior conversation turn as sent by HTTP callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryMessage {
    pub role: Role,
    pub content: String,
}

impl From<HistoryMessage> for Message {
    fn from(msg: HistoryMessage) -> Self {
        Message::with_role(msg.role, msg.content)
    }
}

/// Usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Finish reason
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    Other(String),
}

/// Provider information
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
}

/// Per-call context used to correlate log lines.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub provider_id: String,
    pub model: String,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(provider_id: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            provider_id: provider_id.into(),
            model: model.into(),
        }
    }
}

// ============================================================================
// Chat Completion Types (Provider Interface)
// ============================================================================

/// Chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    /// Correlates provider-side log lines with the reasoning call
    #[serde(skip)]
    pub request_id: Option<String>,
}

impl ChatCompletionRequest {
    /// Create a new chat completion request
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
            top_p: None,
            stop: None,
            request_id: None,
        }
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Tag the request with the id of the reasoning call it serves
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

/// Single choice in chat completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub index: u32,
    pub message: Message,
    pub finish_reason: FinishReason,
}

/// Chat completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Usage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<u64>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, or a provider error when the backend
    /// returned no choices at all.
    pub fn first_text(&self) -> Result<String, ReasonError> {
        self.choices
            .first()
            .map(|choice| choice.message.text())
            .ok_or_else(|| ReasonError::provider("No choices in response"))
    }
}

// ============================================================================
// Reasoning Types
// ============================================================================

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_algorithm() -> String {
    DEFAULT_ALGORITHM.to_string()
}

/// A single reasoning request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReasoningRequest {
    /// The input prompt for reasoning
    pub prompt: String,

    /// Sampling temperature, 0.0 - 1.0
    ///
    /// Kept at wire precision so values just outside the range cannot round
    /// into it before [`validate`](Self::validate) runs.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Prior conversation turns, sent between the preamble and the prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<HistoryMessage>>,

    /// Registered name of the reasoning algorithm
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl ReasoningRequest {
    /// Create a request with the default temperature and algorithm
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: DEFAULT_TEMPERATURE,
            messages: None,
            algorithm: default_algorithm(),
        }
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set algorithm
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Set conversation history
    pub fn with_messages(mut self, messages: Vec<HistoryMessage>) -> Self {
        self.messages = Some(messages);
        self
    }

    /// Check the sampling parameters.
    pub fn validate(&self) -> Result<(), ReasonError> {
        if !self.temperature.is_finite() || !(0.0..=1.0).contains(&self.temperature) {
            return Err(ReasonError::invalid_request(format!(
                "temperature must be between 0.0 and 1.0, got {}",
                self.temperature
            )));
        }
        Ok(())
    }

    /// Temperature at the precision backends accept.
    pub fn backend_temperature(&self) -> f32 {
        self.temperature as f32
    }
}

/// Metadata attached to every reasoning result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultMetadata {
    pub model_name: String,
    pub temperature: f64,
}

/// Structured outcome of one reasoning call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReasoningResult {
    /// Raw model output
    pub response: String,
    /// Labeled steps extracted from the output, in order
    pub reasoning_steps: Vec<String>,
    /// Last step, or the raw output when no step was recognized
    pub final_answer: String,
    /// Wall-clock seconds spent serving the request
    pub execution_time: f64,
    pub metadata: ResultMetadata,
}

impl ReasoningResult {
    /// Assemble a result from its already-derived parts.
    pub fn format(
        response: String,
        reasoning_steps: Vec<String>,
        final_answer: String,
        elapsed: Duration,
        metadata: ResultMetadata,
    ) -> Self {
        Self {
            response,
            reasoning_steps,
            final_answer,
            execution_time: elapsed.as_secs_f64(),
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_from_json() {
        let req: ReasoningRequest =
            serde_json::from_str(r#"{"prompt": "What is the capital of France?"}"#).unwrap();

        assert_eq!(req.prompt, "What is the capital of France?");
        assert_eq!(req.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(req.algorithm, "chain_of_thought");
        assert!(req.messages.is_none());
    }

    #[test]
    fn test_request_with_history() {
        let req: ReasoningRequest = serde_json::from_str(
            r#"{
                "prompt": "And Germany?",
                "temperature": 0.2,
                "algorithm": "chain_of_thought",
                "messages": [
                    {"role": "user", "content": "Capital of France?"},
                    {"role": "assistant", "content": "Paris"}
                ]
            }"#,
        )
        .unwrap();

        let history = req.messages.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].role, Role::Assistant);

        let msg: Message = history[1].clone().into();
        assert_eq!(msg.text(), "Paris");
    }

    #[test]
    fn test_validate_temperature_bounds() {
        assert!(ReasoningRequest::new("q").with_temperature(0.0).validate().is_ok());
        assert!(ReasoningRequest::new("q").with_temperature(1.0).validate().is_ok());

        for bad in [-0.1, 1.01, 2.0, f64::NAN, f64::INFINITY] {
            let err = ReasoningRequest::new("q")
                .with_temperature(bad)
                .validate()
                .unwrap_err();
            assert!(err.is_client_error());
        }
    }

    #[test]
    fn test_validate_at_wire_precision() {
        for body in [
            r#"{"prompt": "q", "temperature": 1.00000001}"#,
            r#"{"prompt": "q", "temperature": -1e-50}"#,
        ] {
            let req: ReasoningRequest = serde_json::from_str(body).unwrap();
            assert!(req.validate().is_err(), "accepted {body}");
        }

        let req: ReasoningRequest =
            serde_json::from_str(r#"{"prompt": "q", "temperature": 1.0}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.backend_temperature(), 1.0_f32);
    }

    #[test]
    fn test_validate_names_offending_value() {
        let err = ReasoningRequest::new("q")
            .with_temperature(1.5)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_format_result() {
        let result = ReasoningResult::format(
            "Step 1: a\nAnswer: b".to_string(),
            vec!["Step 1: a".to_string(), "Answer: b".to_string()],
            "Answer: b".to_string(),
            Duration::from_millis(1500),
            ResultMetadata {
                model_name: "gpt-4o".to_string(),
                temperature: 0.5,
            },
        );

        assert_eq!(result.execution_time, 1.5);
        assert_eq!(result.final_answer, "Answer: b");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["metadata"]["model_name"], "gpt-4o");
        assert_eq!(json["metadata"]["temperature"], 0.5);
        assert_eq!(json["reasoning_steps"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_chat_request_carries_only_forwarded_fields() {
        let req = ChatCompletionRequest::new("gpt-4o", vec![Message::user("hi")])
            .with_temperature(0.5)
            .with_request_id("req-1");

        let json = serde_json::to_value(&req).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["messages", "model", "temperature"]);

        let message = &json["messages"][0];
        assert_eq!(message.as_object().unwrap().len(), 2);
        assert_eq!(message["role"], "user");
    }

    #[test]
    fn test_first_text_without_choices() {
        let response = ChatCompletionResponse {
            id: "id".to_string(),
            model: "m".to_string(),
            choices: vec![],
            usage: Usage::default(),
            created: None,
        };
        assert!(matches!(
            response.first_text(),
            Err(ReasonError::Provider(_))
        ));
    }
}
