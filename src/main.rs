//! unicornd server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use unicornd::api::AppState;
use unicornd::config::{AppConfig, LogFormat};
use unicornd::random::{SelectionBound, Selector};
use unicornd::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config);

    if let Some(reason) = &config.log_fallback {
        tracing::warn!(%reason, "Invalid logging configuration; using defaults");
    }

    let selector = Arc::new(Selector::from_time(SelectionBound::ExcludeLast));
    let state = AppState::new(selector);

    let listener = server::bind(&config.address)
        .await
        .with_context(|| format!("failed to start listener on {}", config.address))?;

    server::run(listener, state).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("unicornd=info,tower_http=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.log.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }
}
