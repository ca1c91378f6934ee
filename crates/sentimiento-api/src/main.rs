//! sentimiento-api server entry point

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sentimiento_api::ApiError;
use sentimiento_api::api::AppState;
use sentimiento_api::api::run_server;
use sentimiento_api::config::Config;
use sentimiento_api::service::SentimentApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Logging (RUST_LOG overrides the default level)
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = Config::from_env()?;
  tracing::info!(
    bind_addr = %config.bind_addr,
    max_text_length = config.max_text_length,
    "configuration loaded"
  );

  // Analyzers are built once here and shared read-only by every request
  let service = Arc::new(SentimentApiServiceFull::new(&config));
  tracing::info!("sentiment service initialized");

  let state = AppState::new(config, service);

  run_server(state).await
}
