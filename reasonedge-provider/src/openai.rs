//! OpenAI provider implementation using async-openai crate.
//!
//! The same provider serves OpenAI, Azure OpenAI deployments and other
//! OpenAI-compatible endpoints; only the async-openai config differs.

use async_openai::config::{AzureConfig, Config, OpenAIConfig};
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequest, CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
};
use async_openai::Client;
use async_trait::async_trait;
use reasonedge_core::error::ReasonError;
use reasonedge_core::provider::Provider;
use reasonedge_core::types::*;
use std::sync::Arc;

/// OpenAI provider using async-openai
#[derive(Clone)]
pub struct OpenAiProvider<C: Config = OpenAIConfig> {
    client: Client<C>,
    info: Arc<ProviderInfo>,
}

impl<C: Config> std::fmt::Debug for OpenAiProvider<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("info", &self.info)
            .finish()
    }
}

impl OpenAiProvider<OpenAIConfig> {
    /// Create a new OpenAI provider with default configuration
    pub fn new(api_key: impl Into<String>) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self::from_config(config, "openai", "OpenAI")
    }

    /// Create a builder for more configuration options
    pub fn builder() -> OpenAiBuilder {
        OpenAiBuilder::default()
    }
}

impl OpenAiProvider<AzureConfig> {
    /// Create a builder for an Azure OpenAI deployment
    pub fn azure() -> AzureBuilder {
        AzureBuilder::default()
    }
}

impl<C: Config> OpenAiProvider<C> {
    fn from_config(config: C, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            client: Client::with_config(config),
            info: Arc::new(ProviderInfo {
                id: id.into(),
                name: name.into(),
            }),
        }
    }
}

/// Convert our Message type to OpenAI's ChatCompletionRequestMessage
fn convert_message(msg: &Message) -> Result<ChatCompletionRequestMessage, ReasonError> {
    let content = msg.text();

    match msg.role {
        Role::System => {
            let msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(content)
                .build()
                .map_err(|e| {
                    ReasonError::provider(format!("Failed to build system message: {}", e))
                })?;
            Ok(ChatCompletionRequestMessage::System(msg))
        }
        Role::User => {
            let msg = ChatCompletionRequestUserMessageArgs::default()
                .content(content)
                .build()
                .map_err(|e| {
                    ReasonError::provider(format!("Failed to build user message: {}", e))
                })?;
            Ok(ChatCompletionRequestMessage::User(msg))
        }
        Role::Assistant => {
            let msg = ChatCompletionRequestAssistantMessageArgs::default()
                .content(content)
                .build()
                .map_err(|e| {
                    ReasonError::provider(format!("Failed to build assistant message: {}", e))
                })?;
            Ok(ChatCompletionRequestMessage::Assistant(msg))
        }
    }
}

/// Build CreateChatCompletionRequest from our ChatCompletionRequest
fn build_request(req: &ChatCompletionRequest) -> Result<CreateChatCompletionRequest, ReasonError> {
    let messages: Result<Vec<_>, _> = req.messages.iter().map(convert_message).collect();

    let mut builder = CreateChatCompletionRequestArgs::default();
    builder.model(&req.model).messages(messages?);

    if let Some(max_tokens) = req.max_tokens {
        builder.max_completion_tokens(max_tokens);
    }
    if let Some(temperature) = req.temperature {
        builder.temperature(temperature);
    }
    if let Some(top_p) = req.top_p {
        builder.top_p(top_p);
    }
    if let Some(stop) = &req.stop {
        builder.stop(stop.clone());
    }

    builder
        .build()
        .map_err(|e| ReasonError::provider(format!("Failed to build request: {}", e)))
}

/// Convert OpenAI response to our ChatCompletionResponse
fn convert_response(response: CreateChatCompletionResponse) -> ChatCompletionResponse {
    let choices = response
        .choices
        .into_iter()
        .map(|choice| {
            let role = match choice.message.role {
                async_openai::types::Role::System => Role::System,
                async_openai::types::Role::User => Role::User,
                _ => Role::Assistant,
            };
            let message = Message {
                role,
                content: vec![ContentPart::Text {
                    text: choice.message.content.unwrap_or_default(),
                }],
            };

            let finish_reason = choice
                .finish_reason
                .map_or(FinishReason::Stop, |r| match r {
                    async_openai::types::FinishReason::Stop => FinishReason::Stop,
                    async_openai::types::FinishReason::Length => FinishReason::Length,
                    async_openai::types::FinishReason::ContentFilter => {
                        FinishReason::ContentFilter
                    }
                    other => FinishReason::Other(format!("{:?}", other).to_lowercase()),
                });

            Choice {
                index: choice.index,
                message,
                finish_reason,
            }
        })
        .collect();

    let usage = response.usage.map_or(Usage::default(), |u| Usage {
        prompt_tokens: u.prompt_tokens,
        completion_tokens: u.completion_tokens,
        total_tokens: u.total_tokens,
    });

    ChatCompletionResponse {
        id: response.id,
        model: response.model,
        choices,
        usage,
        created: Some(response.created as u64),
    }
}

#[async_trait]
impl<C: Config + Send + Sync + 'static> Provider for OpenAiProvider<C> {
    fn info(&self) -> Arc<ProviderInfo> {
        self.info.clone()
    }

    async fn chat_completion(
        &self,
        req: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ReasonError> {
        let openai_req = build_request(&req)?;

        let response = self
            .client
            .chat()
            .create(openai_req)
            .await
            .map_err(|e| ReasonError::provider(format!("{} API error: {}", self.info.name, e)))?;

        Ok(convert_response(response))
    }
}

/// Builder for OpenAI provider with custom configuration
#[derive(Default)]
pub struct OpenAiBuilder {
    api_key: Option<String>,
    api_base: Option<String>,
    org_id: Option<String>,
}

impl OpenAiBuilder {
    /// Set API key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set API base URL (for OpenAI-compatible APIs like DeepSeek)
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Set organization ID
    pub fn organization(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = Some(org_id.into());
        self
    }

    /// Build the provider
    pub fn build(self) -> Result<OpenAiProvider, ReasonError> {
        self.build_with_id("openai", "OpenAI")
    }

    /// Build a provider with a custom provider ID and name
    ///
    /// Useful for OpenAI-compatible APIs that use the same protocol on a
    /// different endpoint.
    pub fn build_with_id(
        self,
        provider_id: impl Into<String>,
        provider_name: impl Into<String>,
    ) -> Result<OpenAiProvider, ReasonError> {
        let api_key = self
            .api_key
            .ok_or_else(|| ReasonError::configuration("API key is required"))?;

        let mut config = OpenAIConfig::new().with_api_key(api_key);

        if let Some(api_base) = self.api_base {
            config = config.with_api_base(api_base);
        }

        if let Some(org_id) = self.org_id {
            config = config.with_org_id(org_id);
        }

        Ok(OpenAiProvider::from_config(
            config,
            provider_id,
            provider_name,
        ))
    }
}

/// Builder for an Azure OpenAI deployment
#[derive(Default)]
pub struct AzureBuilder {
    api_key: Option<String>,
    api_base: Option<String>,
    deployment_id: Option<String>,
    api_version: Option<String>,
}

impl AzureBuilder {
    /// Set API key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Set the deployment to route requests to
    pub fn deployment_id(mut self, deployment_id: impl Into<String>) -> Self {
        self.deployment_id = Some(deployment_id.into());
        self
    }

    /// Set the Azure REST API version
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Build the provider
    pub fn build(self) -> Result<OpenAiProvider<AzureConfig>, ReasonError> {
        let api_key = self
            .api_key
            .ok_or_else(|| ReasonError::configuration("API key is required"))?;
        let api_base = self
            .api_base
            .ok_or_else(|| ReasonError::configuration("Azure endpoint is required"))?;
        let deployment_id = self
            .deployment_id
            .ok_or_else(|| ReasonError::configuration("Azure deployment id is required"))?;

        let mut config = AzureConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base)
            .with_deployment_id(deployment_id);

        if let Some(api_version) = self.api_version {
            config = config.with_api_version(api_version);
        }

        Ok(OpenAiProvider::from_config(config, "azure", "Azure OpenAI"))
    }
}
