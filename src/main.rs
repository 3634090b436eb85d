use anyhow::{Context, Result};
use phishguard::{app, app_state::AppState, classifier::LogisticModel, config::Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let model = LogisticModel::from_file(config.model_path())
        .with_context(|| format!("loading model from {}", config.model_path()))?;
    info!(
        model_path = config.model_path(),
        feature_count = model.feature_count(),
        "Model loaded"
    );

    let state = AppState::new(model);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("binding to {}", config.bind_addr()))?;
    info!(addr = config.bind_addr(), "Listening");

    axum::serve(listener, app(state)).await?;
    Ok(())
}
