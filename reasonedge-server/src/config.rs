//! Service configuration.
//!
//! Uses `figment` for layered configuration: defaults -> TOML file ->
//! `REASONEDGE_*` environment -> the conventional `MODEL_NAME` and
//! `OPENAI_API_KEY` variables. Nested keys use `__` in the environment,
//! e.g. `REASONEDGE_SERVER__PORT=8080`.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use reasonedge::ReasonError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "reasonedge.toml";

/// Top-level configuration for the reasoning service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    /// Model every request is sent to
    pub model_name: String,
    pub provider: ProviderConfig,
    pub logging: LoggingConfig,
}

/// Listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3100,
        }
    }
}

/// Which OpenAI-compatible backend to talk to.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Azure,
    DeepSeek,
}

/// Language-model backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Custom endpoint; required for Azure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Azure deployment; defaults to the model name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
    /// Azure REST API version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Deadline for the single outbound call
    pub request_timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            api_key: None,
            api_base: None,
            organization: None,
            deployment_id: None,
            api_version: None,
            request_timeout_secs: 60,
            max_tokens: None,
        }
    }
}

impl ProviderConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            filter: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Build the layered figment for an optional config file path.
    pub fn figment(path: Option<&Path>) -> Figment {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        Figment::from(Serialized::defaults(ServiceConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("REASONEDGE_").split("__"))
            .merge(Env::raw().only(&["MODEL_NAME"]))
            .merge(
                Env::raw()
                    .only(&["OPENAI_API_KEY"])
                    .map(|_| "provider.api_key".into()),
            )
    }

    /// Load and validate configuration.
    pub fn load(path: Option<&Path>) -> Result<Self, ReasonError> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(ReasonError::configuration(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
        }
        Self::from_figment(Self::figment(path))
    }

    /// Extract and validate configuration from a prepared figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ReasonError> {
        let config: ServiceConfig = figment
            .extract()
            .map_err(|e| ReasonError::configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ReasonError> {
        if self.model_name.trim().is_empty() {
            return Err(ReasonError::configuration(
                "MODEL_NAME environment variable is not set",
            ));
        }
        if self.provider.api_key.as_deref().map_or(true, str::is_empty) {
            return Err(ReasonError::configuration(
                "provider API key is not set (OPENAI_API_KEY or REASONEDGE_PROVIDER__API_KEY)",
            ));
        }
        if self.provider.kind == ProviderKind::Azure && self.provider.api_base.is_none() {
            return Err(ReasonError::configuration(
                "provider.api_base is required for Azure",
            ));
        }
        if self.provider.request_timeout_secs == 0 {
            return Err(ReasonError::configuration(
                "provider.request_timeout_secs must be positive",
            ));
        }
        Ok(())
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ReasonError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                ReasonError::configuration(format!(
                    "invalid bind address {}:{}: {e}",
                    self.server.host, self.server.port
                ))
            })
    }
}
