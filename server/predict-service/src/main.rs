//! Binary entrypoint for the prediction service.

use std::sync::Arc;

use heat_risk_engine::{RiskConfig, RiskEngine};
use predict_service::{AppState, ServiceConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = ServiceConfig::from_env()?;
  let risk_config = match &config.risk_config_path {
    Some(path) => {
      info!(path = %path.display(), "loading risk config");
      RiskConfig::from_json_file(path)?
    }
    None => RiskConfig::default(),
  };

  let state = Arc::new(AppState {
    engine: RiskEngine::new(risk_config),
  });
  let app = predict_service::router(state);

  info!("predict-service listening on http://{}", config.bind_addr);
  let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
