//! HTTP client for the reasoning service.

use reasonedge_core::error::ReasonError;
use reasonedge_core::strategy::AlgorithmInfo;
use reasonedge_core::types::{ReasoningRequest, ReasoningResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Header carrying the service API key (`Api-Subscription-Key`).
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("api-subscription-key");

const DEFAULT_BASE_URL: &str = "http://localhost:3100";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub message: String,
    pub status: String,
}

/// Client for a ReasonEdge service
#[derive(Debug, Clone)]
pub struct ReasonEdgeClient {
    http: reqwest::Client,
    root: Url,
}

impl ReasonEdgeClient {
    /// Create a client for `base_url` with default settings
    pub fn new(base_url: impl Into<String>) -> Result<Self, ReasonError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a builder for more configuration options
    pub fn builder() -> ReasonEdgeClientBuilder {
        ReasonEdgeClientBuilder::default()
    }

    /// Resolve an endpoint against the base URL and API version.
    pub fn build_url(&self, endpoint: &str) -> Result<Url, ReasonError> {
        self.root
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| ReasonError::invalid_request(format!("bad endpoint {endpoint:?}: {e}")))
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<T, ReasonError> {
        let url = self.build_url(endpoint)?;
        tracing::debug!("{} {}", method, url);

        let mut builder = self.http.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    /// Make a GET request to the service
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ReasonError> {
        self.request(Method::GET, endpoint, None).await
    }

    /// Make a POST request to the service
    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<T, ReasonError> {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    /// Make a PUT request to the service
    pub async fn put<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<T, ReasonError> {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    /// Make a DELETE request to the service
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ReasonError> {
        self.request(Method::DELETE, endpoint, None).await
    }

    /// Check the health of the service
    pub async fn check_health(&self) -> Result<HealthStatus, ReasonError> {
        self.get("/").await
    }

    /// List the reasoning algorithms the service accepts
    pub async fn algorithms(&self) -> Result<Vec<AlgorithmInfo>, ReasonError> {
        self.get("/algorithms").await
    }

    /// Reason about a prompt with the named algorithm
    pub async fn reason(
        &self,
        prompt: impl Into<String>,
        algorithm: impl Into<String>,
        temperature: f64,
    ) -> Result<ReasoningResult, ReasonError> {
        let request = ReasoningRequest::new(prompt)
            .with_algorithm(algorithm)
            .with_temperature(temperature);
        self.reason_with(&request).await
    }

    /// Send a fully specified reasoning request
    pub async fn reason_with(
        &self,
        request: &ReasoningRequest,
    ) -> Result<ReasoningResult, ReasonError> {
        let body = serde_json::to_value(request)?;
        self.post("/reason", &body).await
    }
}

/// Builder for [`ReasonEdgeClient`]
#[derive(Debug, Clone)]
pub struct ReasonEdgeClientBuilder {
    base_url: String,
    api_version: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl Default for ReasonEdgeClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: String::new(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ReasonEdgeClientBuilder {
    /// Set the service base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API version path segment, e.g. `"v1"`; `"/"` means none
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the key sent in the `Api-Subscription-Key` header
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ReasonEdgeClient, ReasonError> {
        let base = self.base_url.trim_end_matches('/');
        let version = self.api_version.trim_matches('/');
        let root = if version.is_empty() {
            format!("{base}/")
        } else {
            format!("{base}/{version}/")
        };
        let root = Url::parse(&root).map_err(|e| {
            ReasonError::configuration(format!("invalid base URL {:?}: {e}", self.base_url))
        })?;

        let mut headers = HeaderMap::new();
        if let Some(api_key) = &self.api_key {
            let value = HeaderValue::from_str(api_key)
                .map_err(|_| ReasonError::configuration("API key is not a valid header value"))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()?;

        Ok(ReasonEdgeClient { http, root })
    }
}
