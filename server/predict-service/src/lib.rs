//! Heat Risk Prediction Service
//!
//! HTTP service that scores heat-illness risk for the dashboard.
//! Binds to 127.0.0.1 by default (internal only).

mod config;
mod handlers;
mod state;
mod types;

use std::sync::Arc;

use axum::{routing::get, routing::post, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::{ServiceConfig, ServiceError};
pub use handlers::{evaluate, health, predict};
pub use state::AppState;
pub use types::{PredictComponents, PredictPayload, PredictResponse};

pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/ai/predict", post(predict))
    .route("/evaluate", post(evaluate))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}
