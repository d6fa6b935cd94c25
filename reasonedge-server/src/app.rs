//! Wiring configuration into a running service.

use crate::config::{ProviderKind, ServiceConfig};
use crate::routes::{router, AppState};
use reasonedge::layer::{LoggingLayer, TimeoutLayer};
use reasonedge::provider::{deepseek, OpenAiProvider};
use reasonedge::{Provider, ReasonError, Reasoner};
use std::future::Future;

/// Build the configured provider, boxed so every kind yields one type.
pub fn build_provider(config: &ServiceConfig) -> Result<Box<dyn Provider>, ReasonError> {
    let settings = &config.provider;
    let api_key = settings
        .api_key
        .clone()
        .ok_or_else(|| ReasonError::configuration("API key is required"))?;

    let provider: Box<dyn Provider> = match settings.kind {
        ProviderKind::OpenAi => {
            let mut builder = OpenAiProvider::builder().api_key(api_key);
            if let Some(api_base) = &settings.api_base {
                builder = builder.api_base(api_base);
            }
            if let Some(organization) = &settings.organization {
                builder = builder.organization(organization);
            }
            Box::new(builder.build()?)
        }
        ProviderKind::Azure => {
            let api_base = settings
                .api_base
                .clone()
                .ok_or_else(|| ReasonError::configuration("Azure endpoint is required"))?;
            let deployment_id = settings
                .deployment_id
                .clone()
                .unwrap_or_else(|| config.model_name.clone());
            let mut builder = OpenAiProvider::azure()
                .api_key(api_key)
                .api_base(api_base)
                .deployment_id(deployment_id);
            if let Some(api_version) = &settings.api_version {
                builder = builder.api_version(api_version);
            }
            Box::new(builder.build()?)
        }
        ProviderKind::DeepSeek => Box::new(deepseek(api_key)?),
    };

    Ok(provider)
}

/// Compose provider, layers and model into a reasoner.
pub fn build_reasoner<P: Provider>(provider: P, config: &ServiceConfig) -> Reasoner {
    let builder = Reasoner::builder(provider, config.model_name.clone())
        .layer(TimeoutLayer::new(config.provider.request_timeout()))
        .layer(LoggingLayer::new());

    match config.provider.max_tokens {
        Some(max_tokens) => builder.max_tokens(max_tokens).finish(),
        None => builder.finish(),
    }
}

/// Bind and serve until `shutdown` resolves.
pub async fn serve(
    config: &ServiceConfig,
    reasoner: Reasoner,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let addr = config.bind_addr()?;
    let app = router(AppState::new(reasoner));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "ReasonEdge listening on {} (model={})",
        listener.local_addr()?,
        config.model_name
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("ReasonEdge stopped");
    Ok(())
}
